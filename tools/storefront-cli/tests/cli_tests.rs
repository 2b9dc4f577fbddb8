//! Integration tests for the storefront binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn storefront(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_browse_lists_demo_catalog() {
    let dir = TempDir::new().unwrap();
    storefront(&dir)
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 of 6 products"))
        .stdout(predicate::str::contains("Wireless Headphones"))
        .stdout(predicate::str::contains("$129.99"));
}

#[test]
fn test_browse_json_sorted_by_price() {
    let dir = TempDir::new().unwrap();
    let output = storefront(&dir)
        .args(["--json", "browse", "--sort", "price-low-high"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let products: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Backpack",
            "Coffee Maker",
            "Bluetooth Speaker",
            "Running Shoes",
            "Wireless Headphones",
            "Smart Watch"
        ]
    );
}

#[test]
fn test_browse_filters_combine() {
    let dir = TempDir::new().unwrap();
    let output = storefront(&dir)
        .args(["--json", "browse", "-c", "Electronics", "--max", "150", "--sort", "rating"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let products: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "6"]);
}

#[test]
fn test_browse_no_results() {
    let dir = TempDir::new().unwrap();
    storefront(&dir)
        .args(["browse", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"))
        .stdout(predicate::str::contains("Try adjusting your filters or search query"));
}

#[test]
fn test_browse_rejects_unknown_sort() {
    let dir = TempDir::new().unwrap();
    storefront(&dir)
        .args(["browse", "--sort", "cheapest"])
        .assert()
        .failure();
}

#[test]
fn test_cart_totals() {
    let dir = TempDir::new().unwrap();
    storefront(&dir)
        .args(["cart", "-a", "1", "-a", "2", "-a", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart (3 items)"))
        .stdout(predicate::str::contains("$529.97"))
        .stdout(predicate::str::contains("$9.99"))
        .stdout(predicate::str::contains("$42.40"))
        .stdout(predicate::str::contains("$582.36"));
}

#[test]
fn test_empty_cart_still_charges_shipping() {
    let dir = TempDir::new().unwrap();
    storefront(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty"))
        .stdout(predicate::str::contains("Total: $9.99"));
}

#[test]
fn test_cart_rejected_quantity_keeps_line() {
    let dir = TempDir::new().unwrap();
    let output = storefront(&dir)
        .args(["--json", "cart", "-a", "2", "-a", "2", "--set", "2=0", "-a", "404"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["items"][0]["quantity"], 2);
    assert_eq!(report["totals"]["item_count"], 2);
}

#[test]
fn test_cart_warns_on_rejected_quantity() {
    let dir = TempDir::new().unwrap();
    storefront(&dir)
        .args(["cart", "-a", "2", "--set", "2=0", "--remove", "404"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Quantity 0 rejected"))
        .stderr(predicate::str::contains("Unknown product: 404"));
}

#[test]
fn test_cart_from_saved_items() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("cart.json"),
        r#"[{"product_id": "4", "name": "Coffee Maker",
             "unit_price": {"amount": "59.99", "currency": "USD"}, "quantity": 2}]"#,
    )
    .unwrap();

    storefront(&dir)
        .args(["cart", "--items", "cart.json", "--remove", "4", "-a", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backpack"))
        .stdout(predicate::str::contains("Coffee Maker").not());
}

#[test]
fn test_cart_rejects_zero_quantity_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("cart.json"),
        r#"[{"product_id": "4", "name": "Coffee Maker",
             "unit_price": {"amount": "59.99", "currency": "USD"}, "quantity": 0}]"#,
    )
    .unwrap();

    storefront(&dir)
        .args(["cart", "--items", "cart.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid quantity 0"));
}

#[test]
fn test_categories_counts() {
    let dir = TempDir::new().unwrap();
    let output = storefront(&dir)
        .args(["--json", "categories"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let counts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(counts[0]["name"], "All");
    assert_eq!(counts[0]["products"], 6);
    assert_eq!(counts[1]["name"], "Electronics");
    assert_eq!(counts[1]["products"], 3);
}

#[test]
fn test_custom_catalog_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("catalog.json"),
        r#"[{"id": "a", "name": "Desk Lamp", "price": {"amount": "25", "currency": "USD"},
             "rating": 3.9, "category": "Home"}]"#,
    )
    .unwrap();

    storefront(&dir)
        .args(["browse", "--catalog", "catalog.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 products"))
        .stdout(predicate::str::contains("Desk Lamp"));
}

#[test]
fn test_config_init_and_pricing_override() {
    let dir = TempDir::new().unwrap();

    storefront(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join("storefront.toml").exists());

    storefront(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    storefront(&dir)
        .args(["config", "set", "pricing.shipping_fee", "0"])
        .assert()
        .success();

    storefront(&dir)
        .args(["config", "get", "pricing.shipping_fee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));

    storefront(&dir)
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $0.00"));
}

#[test]
fn test_config_set_without_file_fails() {
    let dir = TempDir::new().unwrap();
    storefront(&dir)
        .args(["config", "set", "pricing.tax_rate", "0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config init"));
}

#[test]
fn test_config_init_writes_explicit_path() {
    let dir = TempDir::new().unwrap();

    storefront(&dir)
        .args(["--config", "shop.toml", "config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("shop.toml").exists());
    assert!(!dir.path().join("storefront.toml").exists());

    storefront(&dir)
        .args(["--config", "shop.toml", "config", "set", "pricing.currency", "EUR"])
        .assert()
        .success();

    storefront(&dir)
        .args(["--config", "shop.toml", "config", "get", "pricing.currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR"));

    storefront(&dir)
        .args(["--config", "shop.json", "config", "init"])
        .assert()
        .success();
    let json = fs::read_to_string(dir.path().join("shop.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(config["pricing"]["currency"], "USD");
}

#[test]
fn test_cart_accepts_large_quantity() {
    let dir = TempDir::new().unwrap();
    let output = storefront(&dir)
        .args(["--json", "cart", "-a", "2", "--set", "2=10000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["items"][0]["quantity"], 10000);
    assert_eq!(report["totals"]["item_count"], 10000);
}

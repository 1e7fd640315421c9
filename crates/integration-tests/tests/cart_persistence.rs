//! Cart state across simulated application restarts, using the real
//! file-backed store.

use std::fs;
use std::rc::Rc;

use digital_cafe_client::cart::{CartManager, CartRehydration};
use digital_cafe_client::storage::{JsonFileStore, PersistentStore, keys, shared};
use digital_cafe_core::{CartLine, MenuItemId, Price};
use digital_cafe_integration_tests::support::temp_store_path;

fn flat_white(qty: u32) -> CartLine {
    CartLine::new(MenuItemId::new(11), "Flat White", Price::from_units(5), qty)
}

fn croissant(qty: u32) -> CartLine {
    CartLine::new(MenuItemId::new(12), "Croissant", Price::from_units(3), qty)
}

#[test]
fn cart_survives_restart_through_file_store() {
    let path = temp_store_path("cart-restart");

    {
        let store = shared(JsonFileStore::open(&path).expect("open store"));
        let (mut cart, outcome) = CartManager::load(store);
        assert_eq!(outcome, CartRehydration::Empty);
        cart.add_line(flat_white(2)).expect("add");
        cart.add_line(croissant(1)).expect("add");
    }

    // "restart": a fresh store instance over the same file
    let store = shared(JsonFileStore::open(&path).expect("reopen store"));
    let (cart, outcome) = CartManager::load(store);
    assert_eq!(outcome, CartRehydration::Restored { lines: 2 });
    assert_eq!(cart.line_count(), 3);
    assert_eq!(cart.total(), Price::from_units(13));

    fs::remove_file(&path).ok();
}

#[test]
fn corrupt_cart_file_recovers_and_cleans_up() {
    let path = temp_store_path("cart-corrupt");

    {
        let store = shared(JsonFileStore::open(&path).expect("open store"));
        store
            .borrow_mut()
            .set(keys::CART, b"[{\"broken\":true}]")
            .expect("plant corrupt record");
    }

    let store = shared(JsonFileStore::open(&path).expect("reopen store"));
    let (cart, outcome) = CartManager::load(Rc::clone(&store));
    assert_eq!(outcome, CartRehydration::Recovered);
    assert!(cart.is_empty());
    // the corrupt record is gone from durable storage too
    assert!(store.borrow().get(keys::CART).expect("read").is_none());

    fs::remove_file(&path).ok();
}

#[test]
fn hand_edited_zero_quantity_line_is_rejected_on_restart() {
    let path = temp_store_path("cart-zero-qty");

    {
        let store = shared(JsonFileStore::open(&path).expect("open store"));
        // well-formed JSON, but violates the quantity invariant
        let lines = serde_json::to_vec(&vec![flat_white(0)]).expect("encode");
        store.borrow_mut().set(keys::CART, &lines).expect("plant");
    }

    let store = shared(JsonFileStore::open(&path).expect("reopen store"));
    let (cart, outcome) = CartManager::load(store);
    assert_eq!(outcome, CartRehydration::Recovered);
    assert!(cart.is_empty());

    fs::remove_file(&path).ok();
}

#[test]
fn cleared_cart_stays_empty_after_restart() {
    let path = temp_store_path("cart-clear");

    {
        let store = shared(JsonFileStore::open(&path).expect("open store"));
        let (mut cart, _) = CartManager::load(store);
        cart.add_line(flat_white(1)).expect("add");
        cart.clear().expect("clear");
    }

    let store = shared(JsonFileStore::open(&path).expect("reopen store"));
    let (cart, outcome) = CartManager::load(store);
    assert_eq!(outcome, CartRehydration::Empty);
    assert!(cart.is_empty());

    fs::remove_file(&path).ok();
}

use super::*;

/// Tests that admins are granted every resource and action.
///
/// Expected: true for the audit log and for deletes
#[test]
fn admin_is_granted_everything() {
    assert!(role_allows(AccountRole::Admin, Resource::UserAction, Action::View));
    assert!(role_allows(AccountRole::Admin, Resource::Category, Action::Delete));
    assert!(role_allows(AccountRole::Admin, Resource::KioskSurvey, Action::Delete));
}

/// Tests the shopper grants.
///
/// Expected: reviews, favorites and own profile writable, catalogue read-only
#[test]
fn shopper_grants() {
    let role = AccountRole::Shopper;

    assert!(role_allows(role, Resource::Store, Action::View));
    assert!(role_allows(role, Resource::Review, Action::Create));
    assert!(role_allows(role, Resource::FavoriteStore, Action::Delete));
    assert!(role_allows(role, Resource::Shopper, Action::Update));

    assert!(!role_allows(role, Resource::Store, Action::Create));
    assert!(!role_allows(role, Resource::Review, Action::Delete));
    assert!(!role_allows(role, Resource::Category, Action::Update));
    assert!(!role_allows(role, Resource::UserAction, Action::View));
}

/// Tests the store owner grants.
///
/// Expected: stores, products and own profile writable, nothing else
#[test]
fn store_owner_grants() {
    let role = AccountRole::StoreOwner;

    assert!(role_allows(role, Resource::Product, Action::Delete));
    assert!(role_allows(role, Resource::Store, Action::Create));
    assert!(role_allows(role, Resource::StoreOwner, Action::Update));
    assert!(role_allows(role, Resource::Sector, Action::View));

    assert!(!role_allows(role, Resource::Review, Action::Create));
    assert!(!role_allows(role, Resource::FavoriteProduct, Action::Create));
    assert!(!role_allows(role, Resource::Sector, Action::Create));
    assert!(!role_allows(role, Resource::UserAction, Action::View));
}

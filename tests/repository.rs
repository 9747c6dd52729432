use chrono::Utc;

use adboard::domain::ad::NewAd;
use adboard::domain::category::Category;
use adboard::domain::types::{CityName, ImageUrl, PhoneNumber, StreetAddress};
use adboard::repository::{
    AdListQuery, AdReader, AdSortOrder, AdWriter, DieselRepository,
};

mod common;

fn new_ad(phone: &str, city: &str, category: Category) -> NewAd {
    NewAd {
        phone: PhoneNumber::new(phone).expect("valid phone"),
        city: CityName::new(city).expect("valid city"),
        address: None,
        category,
        image_url: None,
        created_at: Utc::now().naive_utc(),
    }
}

#[test]
fn create_and_list_round_trips_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut ad = new_ad("+15551234567", "NYC", Category::Food);
    ad.address = Some(StreetAddress::new("5th Avenue").expect("valid address"));
    ad.image_url = Some(ImageUrl::new("/media/abc.png").expect("valid url"));
    repo.create_ad(&ad).expect("should create ad");

    let ads = repo.list_ads(AdListQuery::default()).expect("should list");
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0].phone.as_str(), "+15551234567");
    assert_eq!(ads[0].city.as_str(), "NYC");
    assert_eq!(
        ads[0].address.as_ref().map(|a| a.as_str()),
        Some("5th Avenue")
    );
    assert_eq!(ads[0].category.as_str(), "food");
    assert_eq!(
        ads[0].image_url.as_ref().map(|u| u.as_str()),
        Some("/media/abc.png")
    );
}

#[test]
fn missing_image_round_trips_as_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_ad(&new_ad("+15551234567", "NYC", Category::Food))
        .expect("should create ad");

    let ads = repo.list_ads(AdListQuery::default()).expect("should list");
    assert!(ads[0].image_url.is_none());
    assert!(ads[0].address.is_none());
}

#[test]
fn count_ads_by_phone_only_counts_that_phone() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let phone = PhoneNumber::new("+15551234567").expect("valid phone");
    repo.create_ad(&new_ad("+15551234567", "NYC", Category::Food))
        .expect("should create ad");
    repo.create_ad(&new_ad("+15551234567", "Boston", Category::Sports))
        .expect("should create ad");
    repo.create_ad(&new_ad("+447911123456", "London", Category::Food))
        .expect("should create ad");

    assert_eq!(repo.count_ads_by_phone(&phone).expect("should count"), 2);

    let other = PhoneNumber::new("+33612345678").expect("valid phone");
    assert_eq!(repo.count_ads_by_phone(&other).expect("should count"), 0);
}

#[test]
fn city_filter_is_case_insensitive_and_anchored() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_ad(&new_ad("+15551234567", "Paris", Category::Food))
        .expect("should create ad");
    repo.create_ad(&new_ad("+15559876543", "paris", Category::Sports))
        .expect("should create ad");
    repo.create_ad(&new_ad("+15550001111", "Parish", Category::Food))
        .expect("should create ad");

    let lower = repo
        .list_ads(AdListQuery::default().city("paris"))
        .expect("should list");
    let upper = repo
        .list_ads(AdListQuery::default().city("PARIS"))
        .expect("should list");

    assert_eq!(lower.len(), 2);
    assert_eq!(
        lower.iter().map(|ad| ad.id).collect::<Vec<_>>(),
        upper.iter().map(|ad| ad.id).collect::<Vec<_>>()
    );
    assert!(lower.iter().all(|ad| ad.city.as_str().len() == 5));
}

#[test]
fn sort_orders_by_created_at() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut first = new_ad("+15551234567", "NYC", Category::Food);
    first.created_at = chrono::DateTime::from_timestamp(100, 0)
        .expect("valid timestamp")
        .naive_utc();
    let mut second = new_ad("+15559876543", "Boston", Category::Food);
    second.created_at = chrono::DateTime::from_timestamp(200, 0)
        .expect("valid timestamp")
        .naive_utc();

    repo.create_ad(&first).expect("should create ad");
    repo.create_ad(&second).expect("should create ad");

    let newest = repo
        .list_ads(AdListQuery::default().sort(AdSortOrder::NewestFirst))
        .expect("should list");
    assert_eq!(newest[0].city.as_str(), "Boston");

    let oldest = repo
        .list_ads(AdListQuery::default().sort(AdSortOrder::OldestFirst))
        .expect("should list");
    assert_eq!(oldest[0].city.as_str(), "NYC");
}

use std::time::Duration;

use campus_match::catalog::{demo_listings, Catalog};
use campus_match::dashboard::owner_stats;
use campus_match::engine::{CompareToggle, EngineError, MatchEngine};
use campus_match::models::{BookingStatus, SwipeDirection};
use campus_match::payment::{PaymentDetails, SimulatedProcessor};
use campus_match::pricing::LeaseTerm;
use campus_match::storage::{MemoryStore, SessionStore};

const RENTER: u32 = 42;

#[tokio::test]
async fn full_renter_session_from_swipe_to_booking() {
    let mut engine = MatchEngine::new(Catalog::new(demo_listings()));

    // Swipe phase: accept two lodges, reject one
    engine.decide(RENTER, 101, SwipeDirection::Accept).unwrap();
    engine.decide(RENTER, 103, SwipeDirection::Accept).unwrap();
    engine.decide(RENTER, 102, SwipeDirection::Reject).unwrap();

    assert_eq!(engine.matched(RENTER).len(), 2);
    assert_eq!(engine.rejected(RENTER).len(), 1);
    assert_eq!(engine.undecided(RENTER).len(), engine.catalog().len() - 3);

    // Shortlist the two matches for comparison
    assert_eq!(
        engine.toggle_compare(RENTER, 101).unwrap(),
        CompareToggle::Added
    );
    assert_eq!(
        engine.toggle_compare(RENTER, 103).unwrap(),
        CompareToggle::Added
    );

    // A listing the renter never matched cannot join the selection, even
    // though there is room for a third slot
    let err = engine.toggle_compare(RENTER, 104).unwrap_err();
    assert!(matches!(err, EngineError::NotMatched(104)));
    assert_eq!(engine.compare_selection(RENTER), &[101, 103]);

    let compared = engine.compare(RENTER).unwrap();
    let ids: Vec<_> = compared.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![101, 103]);

    // Checkout: standard lease on the second match
    let before = owner_stats(&engine, 2).total_earnings;
    let processor = SimulatedProcessor::with_latency(Duration::ZERO);
    let booking = engine
        .submit_payment(
            RENTER,
            103,
            LeaseTerm::StandardTerm,
            &PaymentDetails::default(),
            &processor,
        )
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Completed);
    assert_eq!(booking.amount, 2_160_000);
    assert_eq!(booking.service_fee, 108_000);
    assert_eq!(booking.total, 2_268_000);
    assert_eq!(engine.bookings().len(), 1);

    // The owner's earnings grow by the total minus the platform fee
    let after = owner_stats(&engine, 2).total_earnings;
    assert_eq!(after - before, booking.total - booking.service_fee);
}

#[tokio::test]
async fn booking_log_survives_a_session_restart() {
    let session = SessionStore::new(MemoryStore::new());
    let processor = SimulatedProcessor::with_latency(Duration::ZERO);

    let mut engine = MatchEngine::new(Catalog::new(demo_listings()));
    engine.decide(RENTER, 105, SwipeDirection::Accept).unwrap();
    engine
        .submit_payment(
            RENTER,
            105,
            LeaseTerm::ShortTerm,
            &PaymentDetails::default(),
            &processor,
        )
        .await
        .unwrap();
    session.save_bookings(engine.bookings()).await.unwrap();

    // A fresh engine picks the log back up and keeps numbering after it
    let mut restarted = MatchEngine::new(Catalog::new(demo_listings()));
    restarted.restore_bookings(session.saved_bookings().await);
    assert_eq!(restarted.bookings().len(), 1);

    restarted.decide(RENTER, 101, SwipeDirection::Accept).unwrap();
    let next = restarted
        .submit_payment(
            RENTER,
            101,
            LeaseTerm::Flexible,
            &PaymentDetails::default(),
            &processor,
        )
        .await
        .unwrap();
    assert_eq!(next.id, 2);
}

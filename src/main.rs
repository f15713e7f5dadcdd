use campus_match::catalog::{demo_listings, Catalog};
use campus_match::dashboard;
use campus_match::engine::MatchEngine;
use campus_match::models::{Role, SwipeDirection, User};
use campus_match::payment::{PaymentDetails, SimulatedProcessor};
use campus_match::pricing::{price_breakdown, LeaseTerm};
use campus_match::storage::{FileStore, SessionStore};
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 CampusMatch - Student Housing Matcher");
    info!("=========================================");
    info!("");

    let catalog = Catalog::new(demo_listings());
    let mut engine = MatchEngine::new(catalog);

    // Restore any booking log saved by a previous session
    let session = SessionStore::new(FileStore::new("session_data"));
    let saved = session.saved_bookings().await;
    if !saved.is_empty() {
        info!("Restored {} saved booking(s) from a previous session", saved.len());
        engine.restore_bookings(saved);
    }

    // Sign in the demo renter
    let renter = User {
        id: 1,
        name: "Demo Renter".to_string(),
        email: "renter@campusmatch.demo".to_string(),
        role: Role::Renter,
    };
    session.set_current_user(&renter).await?;
    info!("Signed in as {} ({})", renter.name, renter.email);
    info!("");

    // Swipe through the undecided pool: keep verified lodges, pass on the rest
    info!("Swiping through {} listings...", engine.undecided(renter.id).len());
    let pool: Vec<(u32, String, bool)> = engine
        .undecided(renter.id)
        .iter()
        .map(|l| (l.id, l.name.clone(), l.verified))
        .collect();

    for (id, name, verified) in pool {
        let direction = if verified {
            SwipeDirection::Accept
        } else {
            SwipeDirection::Reject
        };
        engine.decide(renter.id, id, direction)?;
        let symbol = if verified { "💚" } else { "❌" };
        info!("{} {} -> {:?}", symbol, name, direction);
    }
    info!("");

    // Show the matches
    let matches = engine.matched(renter.id);
    info!("✅ Matched {} listings\n", matches.len());
    for (i, listing) in matches.iter().enumerate() {
        println!("{}. {} (₦{}/month)", i + 1, listing.name, listing.price_per_month);
        println!("   {}", listing.location);
        println!("   Amenities: {}", listing.amenities.join(", "));
        println!();
    }

    // Shortlist favorites and a compare selection
    let match_ids: Vec<u32> = matches.iter().map(|l| l.id).collect();
    if let Some(first) = match_ids.first() {
        session.toggle_favorite(*first).await?;
        info!("⭐ Saved listing {} to favorites", first);
    }
    for id in match_ids.iter().take(3) {
        engine.toggle_compare(renter.id, *id)?;
    }

    let compared = engine.compare(renter.id)?;
    info!("");
    info!("📊 Comparing {} listings side by side", compared.len());
    for listing in &compared {
        println!(
            "   {:<24} ₦{:>8}/month  verified: {:<5}  {} amenities",
            listing.name,
            listing.price_per_month,
            listing.verified,
            listing.amenities.len()
        );
    }
    println!();

    // Book the first match on a standard lease
    let chosen = match_ids[0];
    let term = LeaseTerm::StandardTerm;
    let listing = engine.catalog().get(chosen).expect("chosen listing exists");
    let listing_name = listing.name.clone();
    let breakdown = price_breakdown(listing.price_per_month, term);
    info!("💳 Booking '{}' on a {} lease", listing_name, term);
    println!("   Rent ({} months):  ₦{}", term.months(), breakdown.base);
    println!("   Service fee (5%):  ₦{}", breakdown.service_fee);
    println!("   Total:             ₦{}", breakdown.total);
    println!();

    let details = PaymentDetails {
        card_number: "4242 4242 4242 4242".to_string(),
        card_holder: renter.name.clone(),
        expiry: "12/27".to_string(),
        cvv: "123".to_string(),
    };
    let processor = SimulatedProcessor::new();
    let booking = engine
        .submit_payment(renter.id, chosen, term, &details, &processor)
        .await?;
    info!("🎉 Booking {} confirmed for '{}'", booking.id, listing_name);
    info!("");

    // Owner dashboards
    for owner_id in [1, 2] {
        let stats = dashboard::owner_stats(&engine, owner_id);
        println!("Owner {} dashboard:", owner_id);
        println!("   Listings:  {}", stats.listing_count);
        println!("   Matches:   {}", stats.total_matches);
        println!("   Earnings:  ₦{}", stats.total_earnings);
        for row in dashboard::listing_stats(&engine, owner_id) {
            println!(
                "     - {:<24} {} match(es), {} booking(s), ₦{}",
                row.name, row.match_count, row.booking_count, row.revenue
            );
        }
        println!();
    }

    // Persist the booking log for the next session
    session.save_bookings(engine.bookings()).await?;
    info!("💾 Saved {} booking(s) to session_data/", engine.bookings().len());

    Ok(())
}

//! Order-Book-Imbalance Scalper Simulation.
//!
//! Replays synthetic feed traffic through the full engine lifecycle: book
//! maintenance, signal derivation, entries on imbalance, and take-profit /
//! stop-loss closes.

use obi_scalper::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    println!("Order-Book-Imbalance Scalper Simulation");
    println!("Single instrument, paper wallet, full lifecycle\n");

    scenario_1_book_and_signals();
    scenario_2_entry_on_imbalance();
    scenario_3_risk_closes();
    scenario_4_wire_replay();

    println!("\nAll simulations completed successfully.");
}

fn delta(price: Decimal, count: i64, amount: Decimal) -> FeedMessage {
    FeedMessage::Delta(BookDelta::new(Price::new(price), count, amount))
}

/// Book maintenance and signal derivation.
fn scenario_1_book_and_signals() {
    println!("Scenario 1: Book and Signals\n");

    let mut engine = Engine::new(EngineConfig::default());

    engine.process(FeedMessage::Snapshot(vec![
        BookDelta::new(Price::new(dec!(41000)), 2, dec!(3.0)),
        BookDelta::new(Price::new(dec!(40999)), 1, dec!(1.5)),
        BookDelta::new(Price::new(dec!(41001)), 2, dec!(-2.0)),
        BookDelta::new(Price::new(dec!(41002)), 1, dec!(-4.0)),
    ]));

    let book = engine.book();
    println!("  Bids: {} levels, asks: {} levels", book.bid_depth(), book.ask_depth());

    let signals = MarketSignals::compute(book).unwrap();
    println!("  Best bid: {} x {}", signals.best_bid, signals.bid_volume);
    println!("  Best ask: {} x {}", signals.best_ask, signals.ask_volume);
    println!("  Microprice: {}", signals.microprice);
    println!("  Imbalance: {}\n", signals.imbalance);
}

/// Entry policy firing on a strongly bid-imbalanced book.
fn scenario_2_entry_on_imbalance() {
    println!("Scenario 2: Entry on Imbalance\n");

    let mut engine = Engine::new(EngineConfig::default());

    engine.process(delta(dec!(41000), 2, dec!(10.0)));
    engine.process(delta(dec!(41001), 1, dec!(-0.5)));

    let snapshot = engine.snapshot();
    println!("  Imbalance: {}", snapshot.imbalance.unwrap());
    println!("  Open trades: {}", snapshot.open_trades);
    println!("  Status: {}", snapshot.status);
    println!(
        "  Wallet: ${} quote, {} base\n",
        snapshot.quote_balance, snapshot.base_balance
    );
}

/// Take-profit and stop-loss closes moving the counters.
fn scenario_3_risk_closes() {
    println!("Scenario 3: Risk Closes\n");

    let mut engine = Engine::new(EngineConfig::default());

    // open a buy at 41000 with a tight spread
    engine.process(delta(dec!(41000), 2, dec!(10.0)));
    engine.process(delta(dec!(41000.5), 1, dec!(-0.5)));
    println!("  Opened: {}", engine.status());

    // ask rallies past the take-profit threshold
    engine.process(delta(dec!(41000.5), 0, dec!(1)));
    let closed = engine.process(delta(dec!(41001.0), 3, dec!(-10.0)));
    for close in &closed {
        println!(
            "  Closed {} @ {} ({}, pnl {})",
            close.trade.side, close.exit_price, close.reason, close.pnl
        );
    }

    let stats = engine.stats();
    println!(
        "  Trades: {} | gains: {} | losses: {} | win rate: {}%\n",
        stats.total_trades,
        stats.gains,
        stats.losses,
        stats.win_rate()
    );
}

/// Raw wire frames through the decode boundary, unparseable traffic dropped.
fn scenario_4_wire_replay() {
    println!("Scenario 4: Wire Replay\n");

    let frames = [
        r#"{"event":"info","version":2}"#,
        r#"{"event":"subscribed","channel":"book","symbol":"tBTCUSD"}"#,
        r#"[266343, [[41000, 2, 3.0], [40999, 1, 1.5], [41001, 2, -2.0], [41002, 1, -4.0]]]"#,
        r#"[266343, "hb"]"#,
        r#"[266343, [41000, 3, 12.0]]"#,
        "garbage frame",
        r#"[266343, [41001, 0, -1]]"#,
        r#"[266343, [41001.5, 1, -0.4]]"#,
        r#"[266343, "hb"]"#,
        r#"[266343, [41002, 4, -11.0]]"#,
    ];

    let mut engine = Engine::new(EngineConfig::default());
    let mut dropped = 0;

    for raw in frames {
        // boundary policy: decode failures are discarded, never propagated
        match decode_frame(raw) {
            Ok(message) => {
                engine.process(message);
            }
            Err(_) => dropped += 1,
        }
    }

    let snapshot = engine.snapshot();
    println!("  Frames: {} total, {} dropped at the boundary", frames.len(), dropped);
    println!("  Best bid: {:?}", snapshot.best_bid.map(|p| p.value()));
    println!("  Imbalance: {:?}", snapshot.imbalance);
    println!("  Open trades: {}", snapshot.open_trades);
    println!("  Total trades: {}", snapshot.total_trades);
    println!("  Status: {}", snapshot.status);
}

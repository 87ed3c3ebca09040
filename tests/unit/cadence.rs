use super::*;
use crate::foundation::error::HostError;

#[test]
fn delay_saturates_at_zero() {
    let c = TickCadence::new(Duration::from_millis(500));
    assert_eq!(
        c.delay_after(Duration::from_millis(120)),
        Duration::from_millis(380)
    );
    assert_eq!(c.delay_after(Duration::from_millis(500)), Duration::ZERO);
    assert_eq!(c.delay_after(Duration::from_secs(3)), Duration::ZERO);
}

#[test]
fn cadence_reads_the_settings_floor() {
    let settings = HostSettings {
        min_tick_ms: 40,
        ..HostSettings::default()
    };
    assert_eq!(
        TickCadence::from_settings(&settings).min_interval(),
        Duration::from_millis(40)
    );
}

#[test]
fn run_paces_ticks_by_the_floor() {
    let c = TickCadence::new(Duration::from_millis(15));
    let mut seen = Vec::new();
    let t0 = Instant::now();
    let n = c
        .run(3, |seq| {
            seen.push(seq);
            Ok(())
        })
        .unwrap();
    assert_eq!(n, 3);
    assert_eq!(seen, vec![1, 2, 3]);
    assert!(t0.elapsed() >= Duration::from_millis(30));
}

#[test]
fn run_stops_on_first_error() {
    let c = TickCadence::new(Duration::ZERO);
    let mut calls = 0;
    let err = c
        .run(10, |seq| {
            calls += 1;
            if seq == 2 {
                return Err(HostError::validation("tick failed"));
            }
            Ok(())
        })
        .unwrap_err();
    assert_eq!(calls, 2);
    assert!(matches!(err, HostError::Validation(_)));
}

#[test]
fn ticker_numbers_ticks_and_respects_the_floor() {
    let t0 = Instant::now();
    let ticker = Ticker::spawn(Duration::from_millis(20)).unwrap();
    let seqs: Vec<u64> = (0..3).filter_map(|_| ticker.serve_one(|seq| seq)).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
    assert!(t0.elapsed() >= Duration::from_millis(40));
}

#[test]
fn ticker_keeps_at_most_one_tick_outstanding() {
    let ticker = Ticker::spawn(Duration::ZERO).unwrap();
    let first = ticker.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(first.seq(), 1);
    assert!(ticker.recv_timeout(Duration::from_millis(50)).is_none());

    first.complete();
    let second = ticker.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(second.seq(), 2);
}

#[test]
fn dropping_the_ticker_stops_it_without_waiting_out_the_floor() {
    let ticker = Ticker::spawn(Duration::from_secs(30)).unwrap();
    assert_eq!(ticker.serve_one(|seq| seq), Some(1));
    let t0 = Instant::now();
    drop(ticker);
    assert!(t0.elapsed() < Duration::from_secs(5));
}

#[test]
fn dropping_the_ticker_while_a_tick_is_held_does_not_hang() {
    let ticker = Ticker::spawn(Duration::ZERO).unwrap();
    let held = ticker.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(held.seq(), 1);

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        drop(ticker);
        let _ = tx.send(());
    });
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
    held.complete();
}

#[test]
fn dropped_request_counts_as_acknowledged() {
    let ticker = Ticker::spawn(Duration::ZERO).unwrap();
    drop(ticker.recv_timeout(Duration::from_secs(5)).unwrap());
    let next = ticker.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(next.seq(), 2);
}

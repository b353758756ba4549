//! End-to-end counter scenarios driven through the interaction harness.
//!
//! Every scenario mounts its own [`Harness`], so no state leaks between
//! scenarios; behavior is asserted through rendered text only.

use contar::{ContarResult, Counter, Harness, Selector};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("contar=debug")),
        )
        .with_test_writer()
        .try_init();
}

fn increment() -> Selector {
    Selector::button("increment").expect("valid pattern")
}

fn decrement() -> Selector {
    Selector::button("decrement").expect("valid pattern")
}

#[tokio::test]
async fn renders_initial_count_zero() -> ContarResult<()> {
    init_tracing();
    let harness = Harness::<Counter>::mount();
    harness
        .expect(&Selector::text("Count: 0"))?
        .to_have_text("Count: 0")
}

#[tokio::test]
async fn increments_count_on_button_click() -> ContarResult<()> {
    init_tracing();
    let mut harness = Harness::<Counter>::mount();
    harness.click(&increment()).await?;
    harness
        .expect(&Selector::text_pattern("^count:")?)?
        .to_have_text("Count: 1")
}

#[tokio::test]
async fn decrements_count_on_button_click() -> ContarResult<()> {
    init_tracing();
    // Fresh mount, independent of the increment scenario.
    let mut harness = Harness::<Counter>::mount();
    harness.click(&decrement()).await?;
    harness
        .expect(&Selector::text_pattern("^count:")?)?
        .to_have_text("Count: -1")
}

#[tokio::test]
async fn mixed_clicks_accumulate() -> ContarResult<()> {
    let mut harness = Harness::<Counter>::mount();
    harness.click(&increment()).await?;
    harness.click(&increment()).await?;
    harness.click(&decrement()).await?;
    harness
        .expect(&Selector::text_pattern("^count:")?)?
        .to_have_text("Count: 1")
}

#[tokio::test]
async fn instances_are_isolated() -> ContarResult<()> {
    let mut first = Harness::<Counter>::mount();
    let second = Harness::<Counter>::mount();

    first.click(&increment()).await?;

    first
        .expect(&Selector::text_pattern("^count:")?)?
        .to_have_text("Count: 1")?;
    // The untouched instance still shows its own state.
    second
        .expect(&Selector::text_pattern("^count:")?)?
        .to_have_text("Count: 0")
}

#[tokio::test]
async fn increment_never_string_concatenates() -> ContarResult<()> {
    // The disallowed variant of this widget stored its state as a string
    // and rendered "Count: 01" after one increment. Pin the numeric path.
    let mut harness = Harness::<Counter>::mount();
    harness.click(&increment()).await?;
    let display = harness.find_by_text_pattern("^count:")?;
    assert_ne!(display.text_content(), "Count: 01");
    assert_eq!(display.text_content(), "Count: 1");
    Ok(())
}

#[tokio::test]
async fn failed_assertion_reports_expected_and_actual() -> ContarResult<()> {
    let harness = Harness::<Counter>::mount();
    let err = harness
        .expect(&Selector::text_pattern("^count:")?)?
        .to_have_text("Count: 5")
        .unwrap_err();
    let diagnostic = err.to_string();
    assert!(diagnostic.contains("Count: 5"));
    assert!(diagnostic.contains("Count: 0"));
    // The runner also gets the rendered tree the assertion ran against.
    assert!(diagnostic.contains("rendered tree:"));
    Ok(())
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

proptest! {
    /// k consecutive increments display "Count: {k}".
    #[test]
    fn prop_increments_accumulate(k in 0usize..48) {
        block_on(async {
            let mut harness = Harness::<Counter>::mount();
            for _ in 0..k {
                harness.click(&increment()).await.unwrap();
            }
            harness
                .expect(&Selector::text_pattern("^count:").unwrap())
                .unwrap()
                .to_have_text(format!("Count: {k}"))
                .unwrap();
        });
    }

    /// k consecutive decrements display "Count: {-k}".
    #[test]
    fn prop_decrements_accumulate(k in 0usize..48) {
        block_on(async {
            let mut harness = Harness::<Counter>::mount();
            for _ in 0..k {
                harness.click(&decrement()).await.unwrap();
            }
            let expected = format!("Count: {}", -(k as i64));
            harness
                .expect(&Selector::text_pattern("^count:").unwrap())
                .unwrap()
                .to_have_text(expected)
                .unwrap();
        });
    }

    /// Any interleaving of increments and decrements nets out to i - d.
    #[test]
    fn prop_interleavings_are_order_independent(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
        block_on(async {
            let mut harness = Harness::<Counter>::mount();
            let mut net: i64 = 0;
            for up in &steps {
                if *up {
                    harness.click(&increment()).await.unwrap();
                    net += 1;
                } else {
                    harness.click(&decrement()).await.unwrap();
                    net -= 1;
                }
            }
            harness
                .expect(&Selector::text_pattern("^count:").unwrap())
                .unwrap()
                .to_have_text(format!("Count: {net}"))
                .unwrap();
        });
    }

    /// Batched activations all take effect: n dispatches settled together
    /// display "Count: {n}", never 1.
    #[test]
    fn prop_batched_dispatches_all_apply(n in 1usize..16) {
        block_on(async {
            let mut harness = Harness::<Counter>::mount();
            for _ in 0..n {
                harness.dispatch(&increment()).unwrap();
            }
            harness.settle().await;
            harness
                .expect(&Selector::text_pattern("^count:").unwrap())
                .unwrap()
                .to_have_text(format!("Count: {n}"))
                .unwrap();
        });
    }
}

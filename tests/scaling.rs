//! Rendering time stays linear in input crowded with unclosed openers.

use std::time::{Duration, Instant};

use inlinemark::Config;

#[macro_use]
mod prelude;
use prelude::*;

fn fastest_render(text: &str, config: &Config) -> Duration {
    (0..3)
        .map(|_| {
            let start = Instant::now();
            render_with(text, config);
            start.elapsed()
        })
        .min()
        .unwrap_or_default()
}

#[rstest]
#[case::brackets("[")]
#[case::link_openers("[a](")]
#[case::link_titles("[a](b \"")]
#[case::strikethrough("~~a ")]
#[case::comments("<!--")]
#[case::paired_tags("<b>")]
#[case::autolinks("<a:")]
fn render_cost_grows_linearly(#[case] unit: &str) {
    let config = Config::default();
    render_with(unit, &config);
    let small = fastest_render(&unit.repeat(5_000), &config);
    let large = fastest_render(&unit.repeat(20_000), &config);
    // Four times the input; a quadratic scan takes about sixteen times longer.
    assert!(
        large < small * 10 + Duration::from_millis(50),
        "{unit:?}: 5k took {small:?}, 20k took {large:?}"
    );
}

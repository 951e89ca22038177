// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped options from JSON, filtered, shown as chips, with a tab trap.
//!
//! Both the widget configuration and the option records are plain JSON, the
//! way a dashboard screen would receive them.
//!
//! Run:
//! - `cargo run -p multipick_demos --example json_countries`

use kurbo::{Point, Rect};
use multipick::{DisplayLabel, MultiSelect, MultiSelectConfig};
use multipick_event_state::keys::{Key, KeyEvent};
use multipick_focus::{FocusEntry, FocusOrigin, Sentinel};
use multipick_options::FieldConfig;
use multipick_overlay::OverlayManager;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: MultiSelectConfig = serde_json::from_value(json!({
        "filter": true,
        "autoFilterFocus": true,
        "display": "chip",
        "resetFilterOnHide": true
    }))
    .expect("valid config");
    let fields: FieldConfig = serde_json::from_value(json!({
        "label": "name",
        "value": "code",
        "groupLabel": "region",
        "groupChildren": "countries"
    }))
    .expect("valid fields");
    let options = json!([
        { "region": "Europe", "countries": [
            { "name": "Germany", "code": "DE" },
            { "name": "Spain", "code": "ES" },
            { "name": "Finland", "code": "FI" }
        ]},
        { "region": "Asia", "countries": [
            { "name": "Japan", "code": "JP" },
            { "name": "Thailand", "code": "TH" }
        ]}
    ]);

    let manager = OverlayManager::shared();
    let mut select = MultiSelect::from_json(fields, options, config, manager.clone())
        .expect("options are well formed")
        .with_id("countries");

    select.show();
    select.tick(0);
    println!("focus requests: {:?}", select.take_effects());

    select.set_filter("land");
    for i in 0..select.visible().len() {
        let label = select.label_at(i).unwrap_or_default();
        let indent = if select.pos_in_set(i).is_some() { "  " } else { "" };
        println!("{indent}{label}");
    }
    println!("{}", select.filter_result_message());

    select.on_filter_key_down(KeyEvent::new(Key::ArrowDown));
    select.on_filter_key_down(KeyEvent::new(Key::Enter));
    select.on_filter_key_down(KeyEvent::new(Key::ArrowDown));
    select.on_filter_key_down(KeyEvent::new(Key::Enter));
    println!("active descendant: {:?}", select.focused_option_id());

    // The filter input and the header checkbox are focusable inside the overlay.
    select.set_overlay_focusables(vec![
        FocusEntry {
            id: 1,
            rect: Rect::new(0.0, 0.0, 200.0, 30.0),
            order: None,
            enabled: true,
        },
        FocusEntry {
            id: 2,
            rect: Rect::new(0.0, 40.0, 20.0, 60.0),
            order: None,
            enabled: true,
        },
    ]);
    select.on_sentinel_focus(Sentinel::Trailing, FocusOrigin::Inside);
    println!("tab past the end: {:?}", select.take_effects());

    select.on_pointer_down(Point::new(900.0, 700.0));
    select.tick(16);

    if let DisplayLabel::Chips(chips) = select.display_label() {
        for chip in chips {
            println!("[{} x]", chip.label.unwrap_or_default());
        }
    }
    println!("{}", select.selected_message());
    println!("overlays still open: {}", manager.borrow().open_count());
}

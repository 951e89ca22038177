// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted keyboard session against a headless multi-select.
//!
//! The "host" here is a loop that feeds key presses, runs the deferred step,
//! and prints whatever the widget emitted. Set `RUST_LOG=debug` (or `trace`)
//! to see the widget's own logging.
//!
//! Run:
//! - `cargo run -p multipick_demos --example keyboard_walkthrough`

use std::sync::Arc;

use kurbo::{Rect, Size};
use multipick::{DisplayLabel, Layout, MultiSelect, MultiSelectConfig};
use multipick_event_state::keys::{Key, KeyEvent, Modifiers};
use multipick_options::{Identity, OptionSource};
use multipick_overlay::OverlayManager;
use tracing_subscriber::EnvFilter;

type Select = MultiSelect<&'static str, Identity>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fruit = Arc::new(OptionSource::flat(vec![
        "Apple",
        "Apricot",
        "Banana",
        "Blueberry",
        "Cherry",
        "Date",
    ]));
    let mut select: Select = MultiSelect::new(
        Identity,
        MultiSelectConfig::default()
            .with_placeholder("Pick some fruit")
            .with_max_selected_labels(Some(3)),
        OverlayManager::shared(),
    )
    .expect("default config is valid")
    .with_options(fruit);
    select.set_layout(Layout {
        trigger: Rect::new(20.0, 20.0, 260.0, 52.0),
        overlay_size: Size::new(240.0, 200.0),
        viewport: Rect::new(0.0, 0.0, 1024.0, 768.0),
    });

    let mut clock = 0_u64;
    let script = [
        ("open", KeyEvent::new(Key::ArrowDown)),
        ("down", KeyEvent::new(Key::ArrowDown)),
        ("toggle", KeyEvent::new(Key::Enter)),
        ("type b", KeyEvent::new(Key::Character('b'))),
        ("type l", KeyEvent::new(Key::Character('l'))),
        ("shift", KeyEvent::new(Key::Shift).with_modifiers(Modifiers::SHIFT)),
        (
            "shift+down",
            KeyEvent::new(Key::ArrowDown).with_modifiers(Modifiers::SHIFT),
        ),
        ("select all", KeyEvent::new(Key::Character('a')).with_modifiers(Modifiers::CTRL)),
        ("close", KeyEvent::new(Key::Escape)),
    ];

    for (step, key) in script {
        clock += 120;
        select.on_key_down(key, clock);
        if step == "shift+down" {
            select.on_key_up(KeyEvent::new(Key::Shift));
        }
        select.tick(clock);
        report(step, &mut select);
    }
}

fn report(step: &str, select: &mut Select) {
    let cursor = select
        .cursor()
        .and_then(|i| select.label_at(i).map(|label| label.into_owned()));
    let label = match select.display_label() {
        DisplayLabel::Placeholder(text) => format!("({text})"),
        DisplayLabel::Text(text) | DisplayLabel::Summary(text) => text,
        DisplayLabel::Chips(chips) => format!("{} chips", chips.len()),
    };
    println!(
        "{step:>12} | overlay {:?} | cursor {cursor:?} | {label}",
        select.overlay_state()
    );
    for event in select.take_events() {
        println!("{:>12} | event  {event:?}", "");
    }
    for effect in select.take_effects() {
        println!("{:>12} | effect {effect:?}", "");
    }
}

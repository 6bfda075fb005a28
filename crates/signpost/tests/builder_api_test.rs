//! Integration tests for the TooltipBuilder API
//!
//! These tests verify that the public API works and is usable.

use std::{cell::Cell, rc::Rc};

use signpost::{
    Tooltip, TooltipBuilder, TopAction,
    anchor::Anchor,
    backdrop::Highlight,
    config::{AppConfig, BehaviorConfig, StyleConfig},
    content::{ActionHandler, ActionItem, ActionsItem, ImageItem, TextItem},
    dismissal::{DismissReason, Dismissal, TapOutcome},
    geometry::{Bounds, Point, Size},
    placement::Side,
    presentation::TapTarget,
    transition::{Phase, Transition},
};

fn screen() -> Bounds {
    Bounds::new(0.0, 0.0, 375.0, 812.0)
}

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = TooltipBuilder::default();
}

#[test]
fn test_layout_simple_tooltip() {
    let tooltip = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
        .with_item(TextItem::new("Tap here to start", 120.0));

    let builder = TooltipBuilder::default();
    let result = builder.layout(&tooltip, screen());
    assert!(
        result.is_ok(),
        "Should lay out valid tooltip: {:?}",
        result.err()
    );
    assert_eq!(result.unwrap().placement().side(), Side::Right);
}

#[test]
fn test_render_simple_tooltip() {
    let tooltip = Tooltip::new(Anchor::new(20.0, 100.0, 60.0, 30.0))
        .with_item(TextItem::new("Filters live here", 110.0))
        .with_highlight(Bounds::new(20.0, 100.0, 60.0, 30.0));

    let builder = TooltipBuilder::default();
    let presentation = builder
        .layout(&tooltip, screen())
        .expect("Failed to lay out tooltip");
    let result = builder.render_svg(&presentation);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
        assert!(svg.contains("evenodd"), "Highlight should cut the backdrop");
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::default()
        .with_style(StyleConfig::default().with_shadow(true))
        .with_behavior(BehaviorConfig::default().with_tooltip_closable(true));

    let builder = TooltipBuilder::new(config);
    let tooltip = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
        .with_item(TextItem::new("Closable", 60.0));
    let presentation = builder.layout(&tooltip, screen()).unwrap();
    let svg = builder.render_svg(&presentation).unwrap();

    assert!(presentation.content().close_button().is_some());
    assert!(svg.contains("signpost-shadow"));
}

#[test]
fn test_invalid_screen_returns_error() {
    let builder = TooltipBuilder::default();
    let result = builder.layout(
        &Tooltip::new(Anchor::new(0.0, 0.0, 10.0, 10.0)),
        Bounds::new(0.0, 0.0, -1.0, 812.0),
    );
    assert!(result.is_err(), "Should return error for negative screen");
}

#[test]
fn test_mixed_content_rows() {
    let tooltip = Tooltip::new(Anchor::new(150.0, 600.0, 80.0, 40.0))
        .with_item(TextItem::new("New: saved searches", 140.0))
        .with_item(ImageItem::new(Size::new(120.0, 80.0)).with_source("preview.png"))
        .with_item(
            ActionsItem::new(ActionItem::new("Later", 40.0))
                .with_second(ActionItem::new("Try it", 45.0)),
        );

    let builder = TooltipBuilder::default();
    let presentation = builder.layout(&tooltip, screen()).unwrap();

    assert_eq!(presentation.content().rows().len(), 3);
    assert_eq!(presentation.placement().side(), Side::Bottom);

    let svg = builder.render_svg(&presentation).unwrap();
    assert!(svg.contains("preview.png"));
    assert!(svg.contains("Try it"));
}

#[test]
fn test_full_show_tap_dismiss_cycle() {
    let config = AppConfig::default();
    let builder = TooltipBuilder::new(config.clone());
    let tooltip = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
        .with_item(TextItem::new("Hello", 60.0));
    let presentation = builder.layout(&tooltip, screen()).unwrap();

    let mut transition = Transition::from(config.behavior());
    transition.show(*presentation.placement()).unwrap();
    assert_eq!(transition.advance(1.0), Phase::Visible);

    let reason = Rc::new(Cell::new(None));
    let seen = Rc::clone(&reason);
    let mut dismissal =
        Dismissal::new(config.behavior()).with_callback(move |r| seen.set(Some(r)));

    let outcome = dismissal.handle_tap(&presentation, Point::new(5.0, 5.0));
    assert_eq!(outcome, TapOutcome::Dismissed(DismissReason::BackgroundTap));
    assert_eq!(reason.get(), Some(DismissReason::BackgroundTap));

    assert!(transition.dismiss());
    assert_eq!(transition.advance(1.0), Phase::Dismissed);
}

#[test]
fn test_top_action_is_tappable() {
    let taps = Rc::new(Cell::new(0));
    let counter = Rc::clone(&taps);
    let skip = ActionItem::new("Skip", 30.0)
        .with_handler(ActionHandler::new(move || counter.set(counter.get() + 1)));

    let tooltip = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
        .with_item(TextItem::new("Hello", 60.0))
        .with_highlight(Highlight::new(Bounds::new(300.0, 400.0, 40.0, 40.0)).with_corner_radius(8.0))
        .with_top_action(TopAction::new(skip));
    let presentation = TooltipBuilder::default().layout(&tooltip, screen()).unwrap();

    let (_, frame) = presentation.top_action().expect("top action laid out");
    assert_eq!(presentation.hit_test(frame.center()), TapTarget::TopAction);

    let mut dismissal = Dismissal::new(&BehaviorConfig::default());
    let outcome = dismissal.handle_tap(&presentation, frame.center());
    assert_eq!(outcome, TapOutcome::Invoked(TapTarget::TopAction));
    assert_eq!(taps.get(), 1);
    assert!(!dismissal.is_dismissed());
}

#[test]
fn test_builder_reusability() {
    let builder = TooltipBuilder::default();

    let first = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
        .with_item(TextItem::new("First", 40.0));
    let second = Tooltip::new(Anchor::new(10.0, 10.0, 40.0, 40.0))
        .with_item(TextItem::new("Second", 50.0));

    let svg1 = builder
        .render_svg(&builder.layout(&first, screen()).unwrap())
        .expect("Failed to render first tooltip");
    let svg2 = builder
        .render_svg(&builder.layout(&second, screen()).unwrap())
        .expect("Failed to render second tooltip");

    assert!(svg1.contains("First"));
    assert!(svg2.contains("Second"));
}

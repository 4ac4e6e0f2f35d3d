//! Integration tests for tooltip visibility, layout and layer membership.

use vellum_scene::{FixedMetrics, Group, GroupKind, Layer, LayerHandle, NodeId, Point2D};
use vellum_ui::{Tooltip, Visibility};

const EPS: f32 = 1e-3;

fn group_id(tooltip: &Tooltip) -> NodeId {
    tooltip.group().borrow().id()
}

fn member_ids(layer: &LayerHandle) -> Vec<NodeId> {
    layer.borrow().children().iter().map(|g| g.borrow().id()).collect()
}

#[test]
fn test_unattached_then_attached_scenario() {
    let mut tooltip = Tooltip::new().with_measurer(FixedMetrics::new(30.0, 10.0));

    // No layer: nothing happens.
    tooltip.show(100.0, 50.0);
    assert!(tooltip.layer().is_none());
    assert_eq!(tooltip.visibility(), Visibility::Hidden);

    let layer = Layer::shared();
    tooltip.attach_to(Some(&layer));
    tooltip.show(100.0, 50.0);

    assert!(layer.borrow().contains(group_id(&tooltip)));
    let body = tooltip.body().unwrap();
    assert_eq!((body.width, body.height), (25.0, 27.0));

    let group = tooltip.group().borrow();
    assert!((group.x - (100.0 - 25.0 / 2.0)).abs() < EPS);
    assert!((group.y - (50.0 - 27.0)).abs() < EPS);
}

#[test]
fn test_show_then_hide_restores_membership() {
    let layer = Layer::shared();
    let background = Group::new(GroupKind::Generic).into_shared();
    layer.borrow_mut().add(&background);

    let mut tooltip = Tooltip::with_layer(&layer);
    let before = member_ids(&layer);

    tooltip.set_values(Some("12.5"), Some("Latency")).show(40.0, 40.0);
    assert_eq!(layer.borrow().len(), 2);
    tooltip.hide();

    assert_eq!(member_ids(&layer), before);
}

#[test]
fn test_body_size_tracks_measured_text() {
    let layer = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&layer).with_measurer(FixedMetrics::new(48.0, 14.0));

    tooltip.set_values(Some("text"), Some("label")).show(0.0, 0.0);
    let body = tooltip.body().unwrap();
    assert_eq!(body.width, 48.0 + 25.0);
    assert_eq!(body.height, 14.0 + 14.0 + 27.0);

    tooltip.set_values(None, Some("label"));
    let body = tooltip.body().unwrap();
    assert_eq!(body.width, 48.0 + 25.0);
    assert_eq!(body.height, 14.0 + 27.0);
}

#[test]
fn test_body_bottom_center_sits_on_anchor() {
    let layer = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&layer);

    for (x, y) in [(100.0, 50.0), (13.3, 700.25), (-40.0, 5.0)] {
        tooltip
            .set_values(Some("Memory: 512 MiB"), Some("Node 7"))
            .show_forced(x, y);

        let bounds = tooltip.bounds().unwrap();
        assert!((bounds.center().x - x).abs() < EPS, "center {} vs {x}", bounds.center().x);
        assert!((bounds.bottom() - y).abs() < EPS, "bottom {} vs {y}", bounds.bottom());
    }
}

#[test]
fn test_tail_points_below_anchor() {
    let layer = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&layer).with_measurer(FixedMetrics::new(20.0, 10.0));
    tooltip.set_values(Some("a"), Some("b")).show(200.0, 100.0);

    let group = tooltip.group().borrow();
    let tail = tooltip.tail().unwrap();
    let apex = tail.points[1].offset(group.x, group.y);

    assert!((apex.x - 200.0).abs() < EPS);
    assert!((apex.y - 110.0).abs() < EPS);
    assert!(tooltip.mask().unwrap().points[1].y < tail.points[1].y);
}

#[test]
fn test_repeated_show_is_idempotent() {
    let layer = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&layer);

    tooltip.show(10.0, 10.0);
    let batches = layer.borrow().batch_count();
    tooltip.show(10.0, 10.0);

    assert_eq!(layer.borrow().batch_count(), batches);
    assert_eq!(layer.borrow().len(), 1);
}

#[test]
fn test_attach_while_hidden_only_rebinds() {
    let first = Layer::shared();
    let second = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&first);

    tooltip.attach_to(Some(&second));

    assert!(first.borrow().is_empty());
    assert!(second.borrow().is_empty());
    assert_eq!(first.borrow().batch_count(), 0);
    assert_eq!(second.borrow().batch_count(), 0);

    tooltip.show(5.0, 5.0);
    assert!(second.borrow().contains(group_id(&tooltip)));
    assert!(first.borrow().is_empty());
}

#[test]
fn test_attach_while_shown_moves_group() {
    let first = Layer::shared();
    let second = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&first);
    tooltip.show(5.0, 5.0);

    tooltip.attach_to(Some(&second));

    assert!(!first.borrow().contains(group_id(&tooltip)));
    assert!(second.borrow().contains(group_id(&tooltip)));
    assert_eq!(first.borrow().batch_count(), 2);
    assert_eq!(second.borrow().batch_count(), 1);
    assert!(tooltip.is_visible());

    tooltip.hide();
    assert!(second.borrow().is_empty());
}

#[test]
fn test_attach_same_layer_is_noop() {
    let layer = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&layer);
    tooltip.show(0.0, 0.0);
    let batches = layer.borrow().batch_count();

    tooltip.attach_to(Some(&layer));

    assert_eq!(layer.borrow().batch_count(), batches);
    assert_eq!(layer.borrow().len(), 1);
}

#[test]
fn test_detach_while_shown_leaves_old_layer() {
    let layer = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&layer);
    tooltip.show(0.0, 0.0);

    tooltip.attach_to(None);
    assert!(layer.borrow().is_empty());

    // Without a layer, hide cannot run and the tooltip stays shown.
    tooltip.hide();
    assert!(tooltip.is_visible());
}

#[test]
fn test_set_values_none_normalizes_to_empty() {
    let layer = Layer::shared();
    let mut tooltip = Tooltip::with_layer(&layer);

    tooltip.set_values(Some("x"), Some("y")).set_values(None, None).show(60.0, 60.0);

    assert_eq!((tooltip.text(), tooltip.label()), ("", ""));
    let body = tooltip.body().unwrap();
    assert_eq!((body.width, body.height), (25.0, 27.0));
    assert_eq!(tooltip.last_position(), Point2D::new(60.0, 60.0));
}

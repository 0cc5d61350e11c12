use freightplan_core::ScenePoint;
use freightplan_designer::grid::grid_extent;
use freightplan_designer::{ViewPoint, Viewport};

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(640.0, 480.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}

#[test]
fn test_zoom_in_four_times_and_back() {
    let mut vp = Viewport::new(640.0, 480.0);
    for _ in 0..4 {
        assert!(vp.zoom_in());
    }
    assert_eq!(vp.zoom(), 4.0);
    for _ in 0..4 {
        assert!(vp.zoom_out());
    }
    assert_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_zoom_out_at_minimum_fails() {
    let mut vp = Viewport::new(640.0, 480.0);
    vp.set_zoom(0.25).unwrap();
    assert!(!vp.zoom_out());
    assert_eq!(vp.zoom(), 0.25);
}

#[test]
fn test_reset_zoom() {
    let mut vp = Viewport::new(640.0, 480.0);
    assert!(!vp.reset_zoom());
    vp.set_zoom(3.0).unwrap();
    assert!(vp.reset_zoom());
    assert_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_view_scene_round_trip() {
    let mut vp = Viewport::new(640.0, 480.0);
    vp.set_zoom(2.0).unwrap();
    vp.set_pan(100.0, -40.0);

    let scene = vp.view_to_scene(ViewPoint::new(60.0, 80.0));
    assert_eq!(scene, ScenePoint::new(80.0, 20.0));
    assert_eq!(vp.scene_to_view(scene), ViewPoint::new(60.0, 80.0));
}

#[test]
fn test_pan_by_moves_scene_under_pointer() {
    let mut vp = Viewport::new(640.0, 480.0);
    vp.pan_by(50.0, 75.0);
    assert_eq!(
        vp.view_to_scene(ViewPoint::new(0.0, 0.0)),
        ScenePoint::new(50.0, 75.0)
    );
}

#[test]
fn test_zoom_in_at_keeps_anchor() {
    let mut vp = Viewport::new(640.0, 480.0);
    vp.set_pan(200.0, 300.0);
    let anchor = ViewPoint::new(120.0, 90.0);
    let before = vp.view_to_scene(anchor);

    assert!(vp.zoom_in_at(anchor));
    let after = vp.view_to_scene(anchor);
    assert!((after.x - before.x).abs() < 1e-9);
    assert!((after.y - before.y).abs() < 1e-9);
}

#[test]
fn test_center_on() {
    let mut vp = Viewport::new(640.0, 480.0);
    vp.set_zoom(2.0).unwrap();
    vp.center_on(ScenePoint::new(1024.0, 512.0));
    let center = vp.center();
    assert!((center.x - 1024.0).abs() < 1e-9);
    assert!((center.y - 512.0).abs() < 1e-9);
}

#[test]
fn test_scene_rect_covers_grid() {
    let extent = grid_extent();
    let vp = Viewport::new(640.0, 480.0);
    let rect = vp.scene_rect(10.0);

    // Small canvas: bounded below by the grid plus margin
    assert_eq!(rect.width, extent + 10.0);
    assert_eq!(rect.height, extent + 10.0);
    assert_eq!(rect.center(), ScenePoint::new(extent / 2.0, extent / 2.0));
    assert!(rect.contains(ScenePoint::new(0.0, 0.0)));
    assert!(rect.contains(ScenePoint::new(extent, extent)));

    let mut zoomed_out = Viewport::new(4000.0, 3000.0);
    zoomed_out.set_zoom(0.25).unwrap();
    let rect = zoomed_out.scene_rect(10.0);
    assert_eq!(rect.width, 4000.0 * 2.0 / 0.25 - extent - 10.0);
}

use super::*;
use crate::renderer::mock_render_state::MockRenderState;

// ============================================================================
// clamp_rect_to_min_width
// ============================================================================

#[test]
fn test_wide_enough_span_is_untouched() {
    let (mut min, mut max) = (10, 100);
    clamp_rect_to_min_width(&mut min, &mut max, SCREEN_WD, MIN_VP_WIDTH);
    assert_eq!((min, max), (10, 100));
}

#[test]
fn test_narrow_span_grows_about_its_center() {
    let (mut min, mut max) = (150, 160);
    clamp_rect_to_min_width(&mut min, &mut max, SCREEN_WD, MIN_VP_WIDTH);
    assert_eq!(max - min, MIN_VP_WIDTH);
    // Center stays put (within integer rounding)
    assert!(((min + max) / 2 - 155).abs() <= 1);
}

#[test]
fn test_span_past_high_edge_is_pulled_back() {
    let (mut min, mut max) = (310, 318);
    clamp_rect_to_min_width(&mut min, &mut max, SCREEN_WD, MIN_VP_WIDTH);
    assert!(max - min >= MIN_VP_WIDTH);
}

#[test]
fn test_span_below_zero_is_clamped_up() {
    let (mut min, mut max) = (-40, 10);
    clamp_rect_to_min_width(&mut min, &mut max, SCREEN_WD, MIN_VP_WIDTH);
    assert!(max - min >= MIN_VP_WIDTH);
}

#[test]
fn test_min_width_holds_across_screen_positions() {
    // Whenever screen_size >= min_width,
    // the output span is at least min_width
    for start in (-20..SCREEN_WD + 20).step_by(7) {
        for width in 0..20 {
            let (mut min, mut max) = (start, start + width);
            clamp_rect_to_min_width(&mut min, &mut max, SCREEN_WD, MIN_VP_WIDTH);
            assert!(
                max - min >= MIN_VP_WIDTH,
                "span [{}, {}) from start={} width={}",
                min,
                max,
                start,
                width
            );
        }
    }
}

// ============================================================================
// depth_to_z
// ============================================================================

#[test]
fn test_root_depth_maps_to_nearest() {
    assert_eq!(depth_to_z(STARTING_RENDER_DEPTH), 0);
    assert_eq!(depth_to_z(STARTING_RENDER_DEPTH + 5), 0);
}

#[test]
fn test_negative_depth_saturates_at_far() {
    assert_eq!(depth_to_z(-1), G_MAXZ);
    assert_eq!(depth_to_z(-100), G_MAXZ);
}

#[test]
fn test_z_grows_as_depth_decreases() {
    // Deeper recursion (smaller depth) gets a farther, thinner Z slice
    let mut previous = depth_to_z(STARTING_RENDER_DEPTH);
    for depth in (-1..STARTING_RENDER_DEPTH).rev() {
        let z = depth_to_z(depth);
        assert!(z > previous, "depth {} gave z {} <= {}", depth, z, previous);
        previous = z;
    }
}

#[test]
fn test_slices_thin_exponentially() {
    let slice0 = depth_to_z(STARTING_RENDER_DEPTH - 1) - depth_to_z(STARTING_RENDER_DEPTH);
    let slice1 = depth_to_z(STARTING_RENDER_DEPTH - 2) - depth_to_z(STARTING_RENDER_DEPTH - 1);
    assert!(slice1 < slice0);
}

// ============================================================================
// build_viewport
// ============================================================================

#[test]
fn test_full_screen_viewport_encoding() {
    let mut state = MockRenderState::new();
    let rect = ScreenRect::full_screen();
    let (vp, handle) = build_viewport(&rect, STARTING_RENDER_DEPTH, &mut state).unwrap();

    // 10.2 fixed point: scale = span * 2, trans = (min + max) * 2
    assert_eq!(vp.vscale[0], (SCREEN_WD << 1) as i16);
    assert_eq!(vp.vscale[1], (SCREEN_HT << 1) as i16);
    assert_eq!(vp.vtrans[0], (SCREEN_WD << 1) as i16);
    assert_eq!(vp.vtrans[1], (SCREEN_HT << 1) as i16);

    // Root depth: z window starts at 0
    assert_eq!(vp.vscale[2], ((depth_to_z(STARTING_RENDER_DEPTH - 1)) >> 1) as i16);

    assert_eq!(state.viewports[handle.0 as usize], vp);
}

#[test]
fn test_viewport_enforces_min_width() {
    let mut state = MockRenderState::new();
    let rect = ScreenRect::new(100, 110, 100, 110);
    let (vp, _) = build_viewport(&rect, 1, &mut state).unwrap();
    assert!(vp.vscale[0] >= (MIN_VP_WIDTH << 1) as i16);
    assert!(vp.vscale[1] >= (MIN_VP_WIDTH << 1) as i16);
}

#[test]
fn test_viewport_pool_exhaustion_returns_none() {
    let mut state = MockRenderState::with_budgets(1, u32::MAX, u32::MAX);
    let rect = ScreenRect::full_screen();
    assert!(build_viewport(&rect, 2, &mut state).is_some());
    assert!(build_viewport(&rect, 1, &mut state).is_none());
}

// ============================================================================
// ScreenRect
// ============================================================================

#[test]
fn test_rect_clamp_to_parent() {
    let parent = ScreenRect::new(50, 200, 40, 180);
    let mut child = ScreenRect::new(0, 320, 0, 240);
    child.clamp_to(&parent);
    assert_eq!(child, parent);
    assert!(parent.contains(&child));
}

#[test]
fn test_rect_degeneracy() {
    assert!(ScreenRect::new(10, 10, 0, 100).is_degenerate());
    assert!(ScreenRect::new(20, 10, 0, 100).is_degenerate());
    assert!(!ScreenRect::full_screen().is_degenerate());
}

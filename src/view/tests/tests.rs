use super::*;

fn ready_view() -> ViewCore {
    let mut view = ViewCore::new(GridConfig::default());
    view.mount().unwrap();
    view
}

#[test]
fn mount_fills_the_grid_and_goes_ready() {
    let mut view = ViewCore::new(GridConfig::default());
    assert_eq!(view.state(), ViewState::Uninitialized);

    view.mount().unwrap();

    assert_eq!(view.state(), ViewState::Ready);
    assert_eq!(view.rows().len(), 256);
    assert!(view.rows().iter().all(|p| p.color == Color::WHITE));
    assert_eq!(view.store().init_runs(), 1);
}

#[test]
fn default_draw_color_is_black() {
    let view = ready_view();
    assert_eq!(view.selected_color(), Color::BLACK);
}

#[test]
fn invalid_picker_value_keeps_the_previous_color() {
    let mut view = ready_view();
    view.set_selected_color("#FF0000").unwrap();
    assert!(view.set_selected_color("not-a-color").is_err());
    assert_eq!(view.selected_color().css(), "#FF0000");
}

#[test]
fn click_translation_by_integer_division() {
    let view = ready_view();
    // Cell size 20: raster (45, 62) lands in cell (2, 3).
    assert_eq!(view.cell_at(45, 62), Some((2, 3)));
    assert_eq!(view.cell_at(0, 0), Some((0, 0)));
    assert_eq!(view.cell_at(319, 319), Some((15, 15)));
}

#[test]
fn clicks_outside_the_canvas_are_ignored() {
    let view = ready_view();
    assert_eq!(view.cell_at(-1, 10), None);
    assert_eq!(view.cell_at(10, -1), None);
    assert_eq!(view.cell_at(320, 0), None);
    assert_eq!(view.cell_at(0, 320), None);
}

#[test]
fn draw_updates_one_row_and_reenters_ready() {
    let mut view = ready_view();
    view.set_selected_color("#FF0000").unwrap();

    view.draw(2, 3).unwrap();

    assert_eq!(view.state(), ViewState::Ready);
    let changed: Vec<&Pixel> = view
        .rows()
        .iter()
        .filter(|p| p.color != Color::WHITE)
        .collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].x, 2);
    assert_eq!(changed[0].y, 3);
    assert_eq!(changed[0].color.css(), "#FF0000");
}

#[test]
fn reload_on_an_empty_store_initializes_exactly_once() {
    let mut view = ViewCore::new(GridConfig::new(2, 2, 20, Color::WHITE));

    // Skip mount entirely; reload must fall back to one init + one retry.
    view.reload().unwrap();

    assert_eq!(view.rows().len(), 4);
    assert_eq!(view.store().init_runs(), 1);
}

#[test]
fn rows_stay_ordered_after_edits() {
    let mut view = ready_view();
    view.set_selected_color("#00FF00").unwrap();
    view.draw(15, 0).unwrap();
    view.draw(0, 15).unwrap();

    let keys: Vec<(u32, u32)> = view.rows().iter().map(|p| (p.y, p.x)).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn draw_list_scales_cells_by_cell_size() {
    let mut view = ViewCore::new(GridConfig::new(2, 2, 20, Color::WHITE));
    view.mount().unwrap();

    let fills = view.draw_list();
    assert_eq!(fills.len(), 4);
    assert_eq!(
        fills[1],
        CellFill {
            px: 20,
            py: 0,
            size: 20,
            color: Color::WHITE,
        }
    );
    assert_eq!(fills[2].px, 0);
    assert_eq!(fills[2].py, 20);
}

#[test]
fn color_buffer_mirrors_rows_in_grid_order() {
    let mut view = ViewCore::new(GridConfig::new(2, 2, 20, Color::WHITE));
    view.mount().unwrap();
    view.set_selected_color("#FF0000").unwrap();
    view.draw(1, 0).unwrap();

    let buf = view.color_buffer();
    assert_eq!(buf.len(), 4);
    assert_eq!(buf[0], Color::WHITE.to_abgr());
    assert_eq!(buf[1], "#FF0000".parse::<Color>().unwrap().to_abgr());
    assert_eq!(buf[2], Color::WHITE.to_abgr());
    assert_eq!(buf[3], Color::WHITE.to_abgr());
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use lockstudy::catalog::{builtin_catalog, CIRCULAR_WAIT_TITLE, PREEMPTION_TITLE};
use lockstudy::model::ScenarioCatalog;
use lockstudy::render::{render_plain, PanelView, ViewModel};
use lockstudy::store::{catalog_from_json_str, catalog_to_json_string};
use lockstudy::viewer::{Panel, ViewerEvent, ViewerState};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> ScenarioCatalog {
    builtin_catalog()
}

fn run(catalog: &ScenarioCatalog, events: &[ViewerEvent]) -> ViewerState {
    let mut state = ViewerState::new();
    for &event in events {
        state.apply(event, catalog.len());
    }
    state
}

#[rstest]
#[case::from_fresh(&[])]
#[case::from_info_open(&[ViewerEvent::Select(1), ViewerEvent::ToggleInfo])]
#[case::from_code_open(&[ViewerEvent::Select(0), ViewerEvent::ToggleCode])]
#[case::same_scenario_again(&[ViewerEvent::Select(0), ViewerEvent::ToggleInfo, ViewerEvent::Select(0)])]
fn selecting_always_lands_with_panels_closed(
    catalog: ScenarioCatalog,
    #[case] before: &[ViewerEvent],
    #[values(0, 1)] index: usize,
) {
    let mut state = run(&catalog, before);
    state.apply(ViewerEvent::Select(index), catalog.len());
    assert_eq!(state.selected(), Some(index));
    assert!(!state.info_visible());
    assert!(!state.code_visible());
}

#[rstest]
fn info_then_code_leaves_only_code(catalog: ScenarioCatalog) {
    let state = run(
        &catalog,
        &[ViewerEvent::Select(0), ViewerEvent::ToggleInfo, ViewerEvent::ToggleCode],
    );
    assert!(!state.info_visible());
    assert!(state.code_visible());
}

#[rstest]
#[case::both_closed(&[ViewerEvent::Select(0)])]
#[case::info_open(&[ViewerEvent::Select(0), ViewerEvent::ToggleInfo])]
fn toggling_info_twice_restores_previous_state(
    catalog: ScenarioCatalog,
    #[case] setup: &[ViewerEvent],
) {
    let before = run(&catalog, setup);
    let mut after = before.clone();
    after.apply(ViewerEvent::ToggleInfo, catalog.len());
    after.apply(ViewerEvent::ToggleInfo, catalog.len());
    assert_eq!(after.info_visible(), before.info_visible());
    assert_eq!(after.code_visible(), before.code_visible());
}

#[rstest]
fn catalog_order_and_code_order_are_stable(catalog: ScenarioCatalog) {
    let titles = catalog.iter().map(|s| s.title()).collect::<Vec<_>>();
    assert_eq!(titles, [PREEMPTION_TITLE, CIRCULAR_WAIT_TITLE]);

    for scenario in &catalog {
        let names = scenario.code().iter().map(|f| f.name().as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Task.java", "Main.java"]);
    }
}

#[rstest]
fn code_panel_shows_exactly_the_selected_scenarios_files(catalog: ScenarioCatalog) {
    let state = run(&catalog, &[ViewerEvent::Select(0), ViewerEvent::ToggleCode]);
    let view = ViewModel::build(&catalog, &state);
    let Some(PanelView::Code(files)) = view.detail.and_then(|detail| detail.panel) else {
        panic!("expected code panel");
    };
    assert_eq!(files.len(), 2);

    let scenario = catalog.get(0).expect("scenario 0");
    for (view_file, file) in files.iter().zip(scenario.code()) {
        assert_eq!(view_file.name, file.name().as_str());
        let shown = view_file.block.lines.iter().map(|l| l.text()).collect::<Vec<_>>().join("\n");
        assert_eq!(shown, file.source().strip_prefix('\n').unwrap_or(file.source()));
    }

    let plain = render_plain(&ViewModel::build(&catalog, &state));
    assert!(!plain.contains("synchronized"), "{plain}");
    assert!(!plain.contains("Task A"), "{plain}");
}

#[rstest]
fn toggles_without_selection_render_nothing_extra(catalog: ScenarioCatalog) {
    let fresh = render_plain(&ViewModel::build(&catalog, &ViewerState::new()));
    let state = run(
        &catalog,
        &[ViewerEvent::ToggleInfo, ViewerEvent::ToggleCode, ViewerEvent::RunSimulation],
    );
    assert_eq!(state.selected(), None);
    assert_eq!(state.open_panel(), None);
    assert_eq!(render_plain(&ViewModel::build(&catalog, &state)), fresh);
}

#[rstest]
fn switching_scenarios_closes_info(catalog: ScenarioCatalog) {
    let state = run(
        &catalog,
        &[ViewerEvent::Select(0), ViewerEvent::ToggleInfo, ViewerEvent::Select(1)],
    );
    assert_eq!(state.open_panel(), None::<Panel>);

    let view = ViewModel::build(&catalog, &state);
    let detail = view.detail.expect("detail");
    assert_eq!(detail.title, CIRCULAR_WAIT_TITLE);
    assert!(detail.panel.is_none());
}

#[rstest]
fn exported_catalog_reads_back_identically(catalog: ScenarioCatalog) {
    let json = catalog_to_json_string(&catalog).expect("export");
    assert_eq!(catalog_from_json_str(&json).expect("import"), catalog);
}

#[test]
#[should_panic(expected = "out of range")]
fn selecting_past_the_catalog_panics() {
    let catalog = builtin_catalog();
    let mut state = ViewerState::new();
    state.apply(ViewerEvent::Select(catalog.len()), catalog.len());
}

use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    add_task_dialog, confirm_dialog, empty_state, footer, header, help_panel, task_list,
    theme_selector, toast,
};

/// 渲染主页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 渲染 Header
    let tasks = app.store.tasks();
    let done = app.store.done_count();
    header::render(
        frame,
        header_area,
        &app.store.path().to_string_lossy(),
        tasks.len() - done,
        done,
        colors,
    );

    // 渲染任务列表（空列表显示空状态）
    if tasks.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        task_list::render(frame, list_area, tasks, app.selected, colors);
    }

    // 渲染 Footer
    footer::render(frame, footer_area, !tasks.is_empty(), colors);

    // 弹窗层
    if app.show_add_dialog {
        add_task_dialog::render(frame, &app.add_input, colors);
    }

    if let Some(ref confirm) = app.confirm_delete {
        confirm_dialog::render(frame, confirm, colors);
    }

    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, colors);
    }

    if app.show_help {
        help_panel::render(frame, colors);
    }

    // Toast 永远在最上层
    if let Some(ref t) = app.toast {
        toast::render(frame, &t.message, colors);
    }
}

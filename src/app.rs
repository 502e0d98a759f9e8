use std::time::{Duration, Instant};

use crate::storage::config::{self, Config, ThemeConfig};
use crate::storage::todos::{Task, TaskStore};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 待确认的删除操作
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub id: u64,
    pub title: String,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务存储（唯一持有者，UI 只读快照）
    pub store: TaskStore,
    /// 当前选中的任务索引
    pub selected: Option<usize>,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 是否显示 Add Task 弹窗
    pub show_add_dialog: bool,
    /// Add Task 输入内容
    pub add_input: String,
    /// 删除确认弹窗
    pub confirm_delete: Option<ConfirmDelete>,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        let theme = Theme::from_name(&config::load_config().theme.name);
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        let selected = if store.tasks().is_empty() {
            None
        } else {
            Some(0)
        };

        Self {
            should_quit: false,
            store,
            selected,
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            show_add_dialog: false,
            add_input: String::new(),
            confirm_delete: None,
            show_help: false,
        }
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.store.tasks().get(i))
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some((current + 1) % len);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some(if current == 0 { len - 1 } else { current - 1 });
    }

    /// 列表变更后修正选中项（删除末尾任务、列表清空等情况）
    fn ensure_selection(&mut self) {
        let len = self.store.tasks().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            None => Some(0),
            Some(i) => Some(i.min(len - 1)),
        };
    }

    // ========== Add Task Dialog ==========

    /// 打开 Add Task 弹窗
    pub fn open_add_dialog(&mut self) {
        self.add_input.clear();
        self.show_add_dialog = true;
    }

    /// 关闭 Add Task 弹窗
    pub fn close_add_dialog(&mut self) {
        self.show_add_dialog = false;
        self.add_input.clear();
    }

    /// Add Task 输入字符
    pub fn add_input_char(&mut self, c: char) {
        self.add_input.push(c);
    }

    /// Add Task 删除字符
    pub fn add_input_delete_char(&mut self) {
        self.add_input.pop();
    }

    /// 提交新任务
    ///
    /// 标题为空时只提示，弹窗保持打开让用户继续输入。
    pub fn submit_add(&mut self) {
        match self.store.add(&self.add_input) {
            Ok(Some(_)) => {
                self.close_add_dialog();
                // 选中刚创建的任务（追加在末尾）
                self.selected = Some(self.store.tasks().len() - 1);
            }
            Ok(None) => {
                self.show_toast("Task title cannot be empty");
            }
            Err(e) => {
                self.close_add_dialog();
                self.show_toast(format!("Warning: failed to save: {}", e));
            }
        }
    }

    // ========== Toggle / Delete ==========

    /// 切换当前选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if let Err(e) = self.store.toggle(id) {
            self.show_toast(format!("Warning: failed to save: {}", e));
        }
    }

    /// 请求删除当前选中任务（弹出确认框）
    pub fn request_delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.confirm_delete = Some(ConfirmDelete {
                id: task.id,
                title: task.title.clone(),
            });
        }
    }

    /// 确认删除
    pub fn apply_delete(&mut self) {
        if let Some(confirm) = self.confirm_delete.take() {
            match self.store.delete(confirm.id) {
                Ok(true) => self.show_toast(format!("Deleted: {}", confirm.title)),
                Ok(false) => {}
                Err(e) => self.show_toast(format!("Warning: failed to save: {}", e)),
            }
            self.ensure_selection();
        }
    }

    /// 取消删除
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        // 找到当前主题在列表中的索引
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        let config = Config {
            theme: ThemeConfig {
                name: self.theme.label().to_string(),
            },
        };
        if let Err(e) = config::save_config(&config) {
            self.show_toast(format!("Warning: failed to save config: {}", e));
        } else {
            self.show_toast(format!("Theme: {}", self.theme.label()));
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        // 只在 Auto 模式下检查
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::todos::TODOS_FILE;
    use tempfile::tempdir;

    fn app_in(dir: &tempfile::TempDir) -> App {
        App::new(TaskStore::load(dir.path().join(TODOS_FILE)))
    }

    #[test]
    fn test_submit_add_creates_and_selects_task() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_add_dialog();
        for c in "Buy milk".chars() {
            app.add_input_char(c);
        }
        app.submit_add();

        assert!(!app.show_add_dialog);
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_submit_empty_input_keeps_dialog_open() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_add_dialog();
        app.add_input_char(' ');
        app.submit_add();

        assert!(app.show_add_dialog);
        assert!(app.store.tasks().is_empty());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_input_editing() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_add_dialog();
        app.add_input_char('a');
        app.add_input_char('b');
        app.add_input_delete_char();
        assert_eq!(app.add_input, "a");

        app.close_add_dialog();
        assert!(app.add_input.is_empty());
    }

    #[test]
    fn test_selection_wraps_around() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.store.add("A").unwrap();
        app.store.add("B").unwrap();
        app.selected = Some(0);

        app.select_next();
        assert_eq!(app.selected, Some(1));
        app.select_next();
        assert_eq!(app.selected, Some(0));
        app.select_previous();
        assert_eq!(app.selected, Some(1));
    }

    #[test]
    fn test_toggle_selected_flips_task() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.store.add("A").unwrap();
        app.selected = Some(0);

        app.toggle_selected();
        assert!(app.store.tasks()[0].completed);
    }

    #[test]
    fn test_delete_flow_with_confirm() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.store.add("A").unwrap();
        app.store.add("B").unwrap();
        app.selected = Some(1);

        app.request_delete_selected();
        let confirm = app.confirm_delete.clone().expect("confirm pending");
        assert_eq!(confirm.title, "B");

        app.apply_delete();
        assert_eq!(app.store.tasks().len(), 1);
        // 选中项被修正到仍然有效的位置
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_cancel_delete_keeps_task() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.store.add("A").unwrap();
        app.selected = Some(0);

        app.request_delete_selected();
        app.cancel_delete();
        assert!(app.confirm_delete.is_none());
        assert_eq!(app.store.tasks().len(), 1);
    }

    #[test]
    fn test_toast_expires() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.toast = Some(Toast::new("hi", Duration::from_millis(0)));
        app.update_toast();
        assert!(app.toast.is_none());
    }
}

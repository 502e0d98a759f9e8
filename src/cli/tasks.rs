//! 任务子命令
//!
//! 脚本化入口，与 TUI 共用同一个 `TaskStore`。每个命令打开存储、
//! 执行单个操作、立即退出。

use crate::storage::todos::{Task, TaskStore};

/// sprig add <title>
pub fn execute_add(title: &str) {
    let mut store = open_store();
    match store.add(title) {
        Ok(Some(id)) => {
            // add 已对标题做过 trim
            println!("Added #{}: {}", id, title.trim());
        }
        Ok(None) => {
            eprintln!("Task title cannot be empty");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to save tasks: {}", e);
            std::process::exit(1);
        }
    }
}

/// sprig list
pub fn execute_list() {
    let store = open_store();
    print!("{}", format_list(store.tasks()));
}

/// sprig done <id>
pub fn execute_done(id: u64) {
    let mut store = open_store();
    match store.toggle(id) {
        Ok(true) => {
            // toggle 不会移除任务，id 一定还在
            if let Some(task) = store.get(id) {
                let state = if task.completed { "done" } else { "pending" };
                println!("#{} → {}", id, state);
            }
        }
        Ok(false) => {
            eprintln!("No task with id {}", id);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to save tasks: {}", e);
            std::process::exit(1);
        }
    }
}

/// sprig rm <id>
pub fn execute_rm(id: u64) {
    let mut store = open_store();
    match store.delete(id) {
        Ok(true) => println!("Deleted #{}", id),
        Ok(false) => {
            eprintln!("No task with id {}", id);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to save tasks: {}", e);
            std::process::exit(1);
        }
    }
}

fn open_store() -> TaskStore {
    match TaskStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open task storage: {}", e);
            std::process::exit(1);
        }
    }
}

/// 格式化任务列表输出
fn format_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet.\n".to_string();
    }

    let mut out = String::new();
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        out.push_str(&format!("{:>4} [{}] {}\n", task.id, mark, task.title));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_empty() {
        assert_eq!(format_list(&[]), "No tasks yet.\n");
    }

    #[test]
    fn test_format_list_marks_completed() {
        let tasks = vec![
            Task {
                id: 1,
                title: "A".to_string(),
                completed: true,
            },
            Task {
                id: 2,
                title: "B".to_string(),
                completed: false,
            },
        ];
        let out = format_list(&tasks);
        assert!(out.contains("[x] A"));
        assert!(out.contains("[ ] B"));
    }
}

//! 任务存储
//!
//! `TaskStore` 拥有内存中的任务列表，并在每次变更后整体写回 todos.json。
//! 加载时文件缺失或无法解析一律当作空列表，不报错。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// todos.json 文件名
pub const TODOS_FILE: &str = "todos.json";

/// 单条任务
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID（单调递增，存储内唯一）
    pub id: u64,
    /// 任务标题（创建时已 trim，非空）
    pub title: String,
    /// 是否已完成
    pub completed: bool,
}

/// 任务存储：内存列表 + todos.json 镜像
///
/// 列表按插入顺序维护，新任务追加到末尾，toggle 不改变位置。
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// 从指定文件加载任务列表
    ///
    /// 文件不存在或内容无法解析时从空列表开始。
    /// ID 计数器取已有最大 ID + 1，保证重新加载后不会复用。
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = read_tasks(&path);
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            path,
            tasks,
            next_id,
        }
    }

    /// 打开默认存储位置: ~/.sprig/todos.json
    pub fn open_default() -> Result<Self> {
        let dir = super::ensure_sprig_dir()?;
        Ok(Self::load(dir.join(TODOS_FILE)))
    }

    /// 存储文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 当前任务列表快照（插入顺序）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 已完成任务数
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// 按 ID 查找任务
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 添加任务，返回新任务的 ID
    ///
    /// 标题 trim 后为空则拒绝：返回 `None`，状态不变，不写文件。
    pub fn add(&mut self, title: &str) -> Result<Option<u64>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            completed: false,
        });
        self.persist()?;
        Ok(Some(id))
    }

    /// 切换任务完成状态，返回是否有任务被改动
    ///
    /// ID 不存在时不做任何事，也不写文件。
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 删除任务，返回是否有任务被删除
    ///
    /// 其余任务保持相对顺序。ID 不存在时不做任何事，也不写文件。
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// 将当前列表写入 todos.json（整体覆盖）
    pub fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.tasks)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// 读取并解析任务文件，缺失或损坏一律当作空列表
fn read_tasks(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::load(dir.path().join(TODOS_FILE))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TODOS_FILE);
        std::fs::write(&path, "{ not json ]").unwrap();

        let store = TaskStore::load(&path);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_appends_pending_task() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        let id = store.add("Buy milk").unwrap().expect("should be accepted");
        assert_eq!(store.tasks().len(), 1);

        let task = store.get(id).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_trims_title() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        let id = store.add("  Buy milk  ").unwrap().unwrap();
        assert_eq!(store.get(id).unwrap().title, "Buy milk");
    }

    #[test]
    fn test_add_whitespace_only_is_rejected() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.add("  ").unwrap().is_none());
        assert!(store.add("").unwrap().is_none());
        assert!(store.tasks().is_empty());
        // 拒绝时不应创建文件
        assert!(!dir.path().join(TODOS_FILE).exists());
    }

    #[test]
    fn test_toggle_flips_and_restores() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        let id = store.add("Task").unwrap().unwrap();

        assert!(store.toggle(id).unwrap());
        assert!(store.get(id).unwrap().completed);

        assert!(store.toggle(id).unwrap());
        assert!(!store.get(id).unwrap().completed);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("Task").unwrap();
        let snapshot = store.tasks().to_vec();

        assert!(!store.toggle(9999).unwrap());
        assert_eq!(store.tasks(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        let a = store.add("A").unwrap().unwrap();
        let b = store.add("B").unwrap().unwrap();
        let c = store.add("C").unwrap().unwrap();

        assert!(store.delete(b).unwrap());
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("A").unwrap();

        assert!(!store.delete(9999).unwrap());
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TODOS_FILE);

        let mut store = TaskStore::load(&path);
        store.add("Buy milk").unwrap();
        let b = store.add("Walk dog").unwrap().unwrap();
        store.toggle(b).unwrap();
        let snapshot = store.tasks().to_vec();

        // 新会话重新加载
        let reloaded = TaskStore::load(&path);
        assert_eq!(reloaded.tasks(), snapshot.as_slice());
    }

    #[test]
    fn test_ids_stay_unique_after_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TODOS_FILE);

        let mut store = TaskStore::load(&path);
        let a = store.add("A").unwrap().unwrap();

        let mut reloaded = TaskStore::load(&path);
        let b = reloaded.add("B").unwrap().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_toggle_delete_scenario() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        let a = store.add("A").unwrap().unwrap();
        let b = store.add("B").unwrap().unwrap();
        store.toggle(a).unwrap();
        store.delete(b).unwrap();

        assert_eq!(store.tasks().len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(task.title, "A");
        assert!(task.completed);
    }

    #[test]
    fn test_persisted_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TODOS_FILE);

        let mut store = TaskStore::load(&path);
        let id = store.add("Buy milk").unwrap().unwrap();

        // 文件内容是裸数组，字段为 id / title / completed
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"], id);
        assert_eq!(arr[0]["title"], "Buy milk");
        assert_eq!(arr[0]["completed"], false);
    }
}

//! 用户内存存储

use std::sync::{Arc, Mutex};

use super::model::User;

/// 进程内用户存储，进程退出即消失
/// 追加是唯一的写操作，id 分配与 push 必须在同一次加锁内完成
#[derive(Clone)]
pub struct UserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserStore {
    /// 创建带两条固定种子记录（id 1 和 2）的存储
    pub fn with_seed_data() -> Self {
        let seed = vec![
            User {
                id: 1,
                name: Some("张三".to_string()),
                email: Some("zhangsan@example.com".to_string()),
                created_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            User {
                id: 2,
                name: Some("李四".to_string()),
                email: Some("lisi@example.com".to_string()),
                created_at: "2024-01-02T00:00:00+00:00".to_string(),
            },
        ];

        Self {
            users: Arc::new(Mutex::new(seed)),
        }
    }

    /// 返回全部用户，保持插入顺序
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// 按 id 线性查找
    pub fn find(&self, id: u64) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    /// 当前记录数
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 追加新用户，id = 当前长度 + 1（不是 max(id) + 1）
    pub fn append(&self, name: Option<String>, email: Option<String>) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as u64 + 1,
            name,
            email,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        users.push(user.clone());
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_records_have_ids_one_and_two() {
        let store = UserStore::with_seed_data();
        let users = store.all();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);
        assert_eq!(users[0].name.as_deref(), Some("张三"));
        assert_eq!(users[1].email.as_deref(), Some("lisi@example.com"));
    }

    #[test]
    fn append_assigns_sequential_ids() {
        let store = UserStore::with_seed_data();

        let third = store.append(Some("王五".to_string()), None);
        assert_eq!(third.id, 3);
        assert!(third.email.is_none());

        let fourth = store.append(None, Some("zhaoliu@example.com".to_string()));
        assert_eq!(fourth.id, 4);
        assert_eq!(store.count(), 4);
    }

    #[test]
    fn find_missing_id_returns_none() {
        let store = UserStore::with_seed_data();

        assert!(store.find(99).is_none());
        assert_eq!(store.find(2).unwrap().name.as_deref(), Some("李四"));
    }

    #[test]
    fn all_preserves_insertion_order() {
        let store = UserStore::with_seed_data();
        store.append(Some("王五".to_string()), None);

        let ids: Vec<u64> = store.all().iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

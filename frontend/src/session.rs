//! 会话持久化
//!
//! 包装 LocalStorage 中的两个固定键：会话令牌与 JSON 序列化的
//! 用户记录。两个键永远一起写、一起删（登录写入，登出或 401 清除）。
//! 启动恢复时任何不完整或损坏的状态都会被清掉并降级为未登录——
//! fail-safe，绝不向调用方抛错。

use crate::web::LocalStorage;
use ims_shared::{STORAGE_TOKEN_KEY, STORAGE_USER_KEY, Session, User};

pub struct SessionStore;

impl SessionStore {
    /// 启动时恢复会话
    ///
    /// 只有令牌与用户记录同时存在且用户记录可解析时才算有会话；
    /// 半份状态或解析失败都会触发整体清除。
    pub fn load() -> Option<Session> {
        let token = LocalStorage::get(STORAGE_TOKEN_KEY);
        let raw_user = LocalStorage::get(STORAGE_USER_KEY);

        match (token, raw_user) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => Some(Session { token, user }),
                Err(_) => {
                    // 用户记录损坏：清掉两个键，降级为未登录
                    Self::clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                // 只剩一半的会话是不完整状态
                Self::clear();
                None
            }
        }
    }

    /// 登录成功后整体写入
    pub fn save(session: &Session) -> bool {
        let raw_user = match serde_json::to_string(&session.user) {
            Ok(raw) => raw,
            Err(_) => return false,
        };
        let token_ok = LocalStorage::set(STORAGE_TOKEN_KEY, &session.token);
        let user_ok = LocalStorage::set(STORAGE_USER_KEY, &raw_user);
        token_ok && user_ok
    }

    /// 登出或收到 401 时整体清除
    pub fn clear() {
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        LocalStorage::delete(STORAGE_USER_KEY);
    }
}

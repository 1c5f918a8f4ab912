use serde::{Deserialize, Serialize};

/// 通用的API响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 错误码，0表示成功，非0表示失败
    pub code: i32,
    /// 错误消息，成功时为"success"
    pub msg: String,
    /// 响应数据，错误时为None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp_data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "success".into(),
            resp_data: Some(data),
        }
    }

    pub fn error(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            resp_data: None,
        }
    }
}

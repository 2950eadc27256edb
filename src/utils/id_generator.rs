use uuid::Uuid;

/// 生成全局唯一ID (32位无连字符小写UUID)
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

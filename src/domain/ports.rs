/// 回文比對前的文字正規化
pub trait TextNormalizer: Send + Sync {
    /// 轉小寫並移除非字母/數字，回傳 code point 序列
    fn normalize(&self, text: &str) -> Vec<char>;
}

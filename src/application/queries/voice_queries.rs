//! Voice Queries

/// 列出上游全部音色
#[derive(Debug, Clone)]
pub struct ListVoices;

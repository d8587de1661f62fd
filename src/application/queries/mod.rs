//! 应用层 - 查询（读操作）
//!
//! 标注是纯计算，没有写操作，全部走查询侧

mod annotate_queries;

pub mod handlers;

pub use annotate_queries::*;

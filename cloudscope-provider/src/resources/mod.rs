//! 各资源类型的取数模块
//!
//! 每个模块对应一个资源类型：wire 结构体、状态归一化、列表 + 详情。
//! 路由在 [`CloudCatalog`](crate::catalog::CloudCatalog)。

pub(crate) mod alerts;
pub(crate) mod buckets;
pub(crate) mod common;
pub(crate) mod instances;
pub(crate) mod load_balancers;
pub(crate) mod networks;
pub(crate) mod volumes;

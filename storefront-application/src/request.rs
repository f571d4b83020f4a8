/// 应用层请求（命令或查询）
///
/// - 命令表达写意图，查询只读；两者经同一条管道处理；
/// - 建议保持语义化的“动宾结构”命名，如 `CreateOrder`、`GetCustomer`。
///
/// 关联常量：
/// - `NAME`：请求的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Request: Send + Sync + 'static {
    /// 请求的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 处理成功时的返回值
    type Response: Send + 'static;
}

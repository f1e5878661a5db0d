/**
 * 求和库入口
 *
 * 说明
 * - sum: 泛型求和函数 calculate_sum 以及 Summator 包装
 * - operand: 文本操作数解析与校验，错误类型 SumError
 */
pub mod operand;
pub mod sum;

pub use operand::{parse_operand, SumError};
pub use sum::{calculate_sum, Summator};

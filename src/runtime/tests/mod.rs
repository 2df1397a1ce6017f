//! Runtime 模块测试
//!
//! 有理数、解释器与内置词的单元测试

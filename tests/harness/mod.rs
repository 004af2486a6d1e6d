#![allow(dead_code, unused_imports)]

pub(crate) mod gemini_mock;
pub(crate) mod test_context;

pub(crate) use test_context::TestContext;

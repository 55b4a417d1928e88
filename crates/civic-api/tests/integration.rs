mod common;

mod community_tests;
mod finance_tests;

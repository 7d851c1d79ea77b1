//! Regression table for the triage classifier.
//!
//! Twelve prompts across all four tiers, replayed in this order. Changing an
//! entry changes what "router is ready" means; add rather than edit.

use triage::Tier;

/// One prompt and the tier it must land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub prompt: &'static str,
    pub expected: Tier,
}

const fn case(prompt: &'static str, expected: Tier) -> TestCase {
    TestCase { prompt, expected }
}

pub const TEST_CASES: [TestCase; 12] = [
    // Simple (3)
    case("Hello!", Tier::Simple),
    case("What's 2+2?", Tier::Simple),
    case("What time is it?", Tier::Simple),
    // Moderate (3)
    case(
        "Summarize the key differences between REST and GraphQL",
        Tier::Moderate,
    ),
    case(
        "Write a product description for a vintage t-shirt",
        Tier::Moderate,
    ),
    case("Explain how DNS works", Tier::Moderate),
    // Coding (4)
    case(
        "Write a Python script that scrapes product prices from a URL",
        Tier::Coding,
    ),
    case(
        "Fix this bug in my React component that causes infinite re-renders",
        Tier::Coding,
    ),
    case(
        "Create a Docker compose file for a Node.js app with Redis and Postgres",
        Tier::Coding,
    ),
    case(
        "Debug this race condition in my async Python code and suggest a fix with tests",
        Tier::Coding,
    ),
    // Complex (2)
    case(
        "Design a microservices architecture for an e-commerce platform with event sourcing",
        Tier::Complex,
    ),
    case(
        "Write a 2000-word blog post analyzing AI trends in print-on-demand",
        Tier::Complex,
    ),
];

// Example cases bundled with the binary

use playground_test_driver::{
    assert_contains, assert_equal, assert_false, assert_not_contains, assert_not_null,
    assert_null, assert_text_eq, assert_throws, assert_throws_matching, assert_throws_msg,
    assert_true, assert_true_msg, assert_undefined, TestOutcome, TestRegistry, Value,
};
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;

#[derive(Debug, PartialEq)]
enum MathError {
    DivisionByZero,
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for MathError {}

fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

fn is_even(number: i64) -> bool {
    number % 2 == 0
}

fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or("World"))
}

async fn delayed<T>(value: T, delay: Duration) -> Result<T, MathError> {
    tokio::time::sleep(delay).await;
    Ok(value)
}

async fn delayed_failure(delay: Duration) -> Result<(), MathError> {
    tokio::time::sleep(delay).await;
    Err(MathError::DivisionByZero)
}

fn register_math(registry: &mut TestRegistry) {
    registry.register("Addition should work correctly", || {
        assert_equal(2 + 2, 4)?;
        assert_equal(10 + 5, 15)?;
        assert_equal(-1 + 1, 0)?;
        assert_equal(0.1 + 0.2, 0.30000000000000004)?;
        Ok(())
    });

    registry.register("Subtraction should work correctly", || {
        assert_equal(5 - 3, 2)?;
        assert_equal(0 - 5, -5)?;
        assert_equal(100 - 50, 50)?;
        Ok(())
    });

    registry.register("Multiplication should work correctly", || {
        assert_equal(3 * 4, 12)?;
        let zero: i32 = "0".parse()?;
        assert_equal(2 * zero, 0)?;
        assert_equal(-2 * 3, -6)?;
        assert_equal(2.5 * 4.0, 10.0)?;
        Ok(())
    });

    registry.register("Division should work correctly", || {
        assert_equal(10 / 2, 5)?;
        assert_equal(7.0 / 2.0, 3.5)?;
        assert_equal(7 / 2, 3)?;
        assert_equal(1.0 / 3.0, 0.3333333333333333)?;
        Ok(())
    });

    registry.register("Power operation should work correctly", || {
        assert_equal(2_i32.pow(3), 8)?;
        assert_equal(5_i32.pow(2), 25)?;
        assert_equal(10_i32.pow(0), 1)?;
        assert_equal(2.0_f64.powi(-1), 0.5)?;
        Ok(())
    });

    registry.register("Even numbers should be detected", || {
        assert_true(is_even(4))?;
        assert_true(is_even(0))?;
        assert_true(is_even(-2))?;
        assert_false(is_even(3))?;
        assert_false(is_even(-5))?;
        Ok(())
    });
}

fn register_strings(registry: &mut TestRegistry) {
    registry.register("String length should be correct", || {
        assert_equal("hello".len(), 5)?;
        assert_equal("".len(), 0)?;
        assert_equal("Rust".chars().count(), 4)?;
        Ok(())
    });

    registry.register("String concatenation should work", || {
        assert_equal(format!("{} {}", "Hello", "World"), "Hello World")?;
        assert_equal(String::from("Rust") + "2021", "Rust2021")?;
        Ok(())
    });

    registry.register("String case conversion should work", || {
        assert_equal("hello".to_uppercase(), "HELLO")?;
        assert_equal("WORLD".to_lowercase(), "world")?;
        Ok(())
    });

    registry.register("String trimming should work", || {
        assert_equal("  hello  ".trim(), "hello")?;
        assert_equal("\tpython\n".trim(), "python")?;
        assert_equal("  ".trim(), "")?;
        Ok(())
    });

    registry.register("String replacement should work", || {
        assert_equal(
            "Hello World".replacen("World", "Rust", 1),
            "Hello Rust",
        )?;
        assert_equal("test test".replace("test", "example"), "example example")?;
        Ok(())
    });

    registry.register("String reversal should work", || {
        assert_equal(reverse_string("hello"), "olleh")?;
        assert_equal(reverse_string(""), "")?;
        assert_equal(reverse_string("abc def"), "fed cba")?;
        Ok(())
    });

    registry.register("Vowels should be counted", || {
        assert_equal(count_vowels("hello"), 2)?;
        assert_equal(count_vowels("AEIOU"), 5)?;
        assert_equal(count_vowels("xyz"), 0)?;
        assert_equal(count_vowels("Hello World"), 3)?;
        Ok(())
    });

    registry.register("Multi-line text should match", || {
        let lines: Vec<_> = ["first", "second"].iter().map(|s| s.to_uppercase()).collect();
        assert_text_eq(&lines.join("\n"), "FIRST\nSECOND")?;
        Ok(())
    });
}

fn register_collections(registry: &mut TestRegistry) {
    registry.register("Vector push should add elements", || {
        let mut items = vec![1, 2];
        items.push(3);
        assert_equal(items.len(), 3)?;
        assert_equal(items[2], 3)?;
        Ok(())
    });

    registry.register("Vector pop should remove last element", || {
        let mut items = vec![1, 2, 3];
        assert_equal(items.pop(), Some(3))?;
        assert_equal(items.len(), 2)?;
        Ok(())
    });

    registry.register("Vector position should find elements", || {
        let items = ["a", "b", "c"];
        assert_equal(items.iter().position(|&s| s == "b"), Some(1))?;
        assert_null(items.iter().position(|&s| s == "d"))?;
        Ok(())
    });

    registry.register("Vector contains should work correctly", || {
        let items = [1, 2, 3, 4, 5];
        assert_contains(&items, &3)?;
        assert_not_contains(&items, &6)?;
        Ok(())
    });

    registry.register("Map, filter and fold should work", || {
        let items = [1, 2, 3, 4];
        let doubled: Vec<_> = items.iter().map(|x| x * 2).collect();
        assert_equal(doubled, vec![2, 4, 6, 8])?;

        let evens: Vec<_> = items.iter().copied().filter(|x| x % 2 == 0).collect();
        assert_equal(evens, vec![2, 4])?;

        assert_equal(items.iter().sum::<i32>(), 10)?;
        Ok(())
    });

    registry.register("Map entries should be accessible", || {
        let mut person = HashMap::new();
        person.insert("name", Value::from("John"));
        person.insert("age", Value::from(30));

        assert_equal(person.get("name"), Some(&Value::from("John")))?;
        person.insert("city", Value::from("New York"));

        let mut keys: Vec<_> = person.keys().copied().collect();
        keys.sort_unstable();
        assert_equal(keys, vec!["age", "city", "name"])?;
        Ok(())
    });

    registry.register("Storage entries should be removable", || {
        let mut storage: HashMap<String, String> = HashMap::new();
        storage.insert("test_key".into(), "test_value".into());
        assert_equal(storage.get("test_key").map(String::as_str), Some("test_value"))?;

        storage.remove("test_key");
        assert_null(storage.get("test_key"))?;
        Ok(())
    });
}

fn register_values(registry: &mut TestRegistry) {
    registry.register("Type checking should work correctly", || {
        assert_equal(Value::from(42).type_name(), "number")?;
        assert_equal(Value::from("hello").type_name(), "string")?;
        assert_equal(Value::from(true).type_name(), "boolean")?;
        assert_equal(Value::Undefined.type_name(), "undefined")?;
        assert_equal(Value::Null.type_name(), "object")?;
        Ok(())
    });

    registry.register("Values should compare strictly", || {
        assert_true(Value::from(1) != Value::from("1"))?;
        assert_undefined(Value::default())?;
        assert_not_null(Value::from(0))?;
        Ok(())
    });

    registry.register("Default parameters should work", || {
        assert_equal(greet(None), "Hello, World!")?;
        assert_equal(greet(Some("John")), "Hello, John!")?;
        Ok(())
    });

    registry.register("Numbers should parse", || {
        let parsed: i32 = "42".parse()?;
        assert_equal(parsed, 42)?;
        Ok(())
    });
}

fn register_errors(registry: &mut TestRegistry) {
    registry.register("Function should throw expected errors", || {
        assert_equal(divide(10.0, 2.0)?, 5.0)?;
        assert_throws_matching(
            || divide(10.0, 0.0),
            "DivisionByZero",
            |e| *e == MathError::DivisionByZero,
        )?;
        Ok(())
    });

    registry.register("Errors should carry their message", || {
        match divide(1.0, 0.0) {
            Ok(_) => assert_true_msg(false, "Division should have failed")?,
            Err(error) => assert_equal(error.to_string(), "Division by zero")?,
        }
        assert_throws(|| "not a number".parse::<i32>())?;
        assert_throws_msg(
            || Vec::<i32>::new().first().copied().ok_or(()),
            "Should be empty",
        )?;
        Ok(())
    });
}

async fn future_resolves() -> TestOutcome {
    let result = delayed("success", Duration::from_millis(10)).await?;
    assert_equal(result, "success")?;
    Ok(())
}

async fn future_rejects() -> TestOutcome {
    match delayed_failure(Duration::from_millis(10)).await {
        Ok(()) => assert_true_msg(false, "Future should have rejected")?,
        Err(error) => assert_equal(error.to_string(), "Division by zero")?,
    }
    Ok(())
}

async fn futures_join() -> TestOutcome {
    let (a, b) = tokio::join!(
        delayed(1, Duration::from_millis(20)),
        delayed(2, Duration::from_millis(5)),
    );
    assert_equal(a? + b?, 3)?;
    Ok(())
}

fn register_async(registry: &mut TestRegistry) {
    registry.register_async("Future should resolve correctly", future_resolves);
    registry.register_async("Future should reject correctly", future_rejects);
    registry.register_async("Concurrent futures should all resolve", futures_join);
}

pub fn register_all(registry: &mut TestRegistry) {
    register_math(registry);
    register_strings(registry);
    register_collections(registry);
    register_values(registry);
    register_errors(registry);
    register_async(registry);
}

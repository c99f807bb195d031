//! Validating a model with field attribution, repair, and a cross-field
//! rule.
//!
//! Run with: `cargo run --example person`

use validus::prelude::*;

#[derive(Debug)]
struct Person {
    name: Option<String>,
    age: Option<i32>,
    email: Option<String>,
    phone_number: Option<String>,
}

impl Validable for Person {
    fn validate(&mut self) -> Result<(), ValidationError> {
        ValidationPlan::new()
            .add(|| {
                // Name is required and must survive trimming; the trimmed
                // value is written back.
                self.name = Some(self.validate_property(
                    "name",
                    self.name.clone(),
                    &not_nil().and_then(trim()).and_then(min_length(1)),
                )?);
                Ok(())
            })
            .add(|| {
                // Age is optional, but a present age must be at least 0.
                self.validate_property("age", self.age, &min(0).optional())?;
                Ok(())
            })
            .add(|| {
                // Email is optional, but must contain @ after trimming.
                self.email = self.validate_property(
                    "email",
                    self.email.clone(),
                    &optional(trim().and_then(matches("@").expect("static pattern"))),
                )?;
                Ok(())
            })
            .add(|| {
                // An email or a phone number is required.
                self.validate_model(
                    &["email", "phoneNumber"],
                    "Please provide an email or a phone number.",
                    &bound(self.email.clone(), not_nil())
                        .or(bound(self.phone_number.clone(), not_nil())),
                )
            })
            .validate()
    }

    fn description(&self) -> String {
        "Person".to_string()
    }
}

fn main() {
    let mut ok = Person {
        name: Some(" Arthur ".to_string()),
        age: Some(35),
        email: Some(" arthur@example.com ".to_string()),
        phone_number: None,
    };
    match ok.validate() {
        Ok(()) => println!("valid: {ok:?}"),
        Err(error) => println!("invalid: {error}"),
    }

    let mut broken = Person {
        name: None,
        age: Some(-1),
        email: None,
        phone_number: None,
    };
    match broken.validate() {
        Ok(()) => println!("valid: {broken:?}"),
        Err(error) => {
            println!("invalid: {error}");
            for (property, errors) in [
                ("name", error.errors_for_property("name")),
                ("age", error.errors_for_property("age")),
            ] {
                for e in errors {
                    println!("  {property}: {e}");
                }
            }
            for e in error.model_errors() {
                println!("  (model): {e}");
            }
        }
    }
}

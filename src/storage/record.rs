use serde::{Serialize, Deserialize};
use std::fmt;

/// One employee document as stored in the `employee` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub age: i64,
    pub gender: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: i64, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.name, self.age, self.gender)
    }
}

/// Identifier assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_display() {
        let employee = Employee::new("Alice", 30, "F");
        assert_eq!(employee.to_string(), "{Alice 30 F}");
    }

    #[test]
    fn test_employee_document_shape() {
        let employee = Employee::new("Bob", -4, "M");
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Bob", "age": -4, "gender": "M"}));

        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_employee_decodes_int32_and_int64_age() {
        use mongodb::bson::{self, doc, oid::ObjectId};

        let narrow = doc! { "_id": ObjectId::new(), "name": "A", "age": 30i32, "gender": "F" };
        assert_eq!(bson::from_document::<Employee>(narrow).unwrap(), Employee::new("A", 30, "F"));

        let wide = doc! { "_id": ObjectId::new(), "name": "B", "age": 5_000_000_000i64, "gender": "M" };
        assert_eq!(
            bson::from_document::<Employee>(wide).unwrap(),
            Employee::new("B", 5_000_000_000, "M")
        );
    }
}

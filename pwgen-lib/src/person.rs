use log::info;

pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn describe(&self) -> String {
        format!("My name is {} {}", self.first_name, self.last_name)
    }

    pub fn introduce(&self) {
        info!("introducing {} {}", self.first_name, self.last_name);
        println!("{}", self.describe());
    }
}

#[cfg(test)]
mod test {
    use super::Person;

    #[test]
    fn describe_john() {
        let john = Person::new("John", "Smith");
        assert_eq!(john.describe(), "My name is John Smith");
    }

    #[test]
    fn describe_after_assignment() {
        let mut person = Person::new("", "");
        person.first_name = "Ada".to_string();
        person.last_name = "Lovelace".to_string();
        assert_eq!(person.describe(), "My name is Ada Lovelace");
    }
}

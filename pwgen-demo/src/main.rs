use log::info;

use pwgen_lib::calculator::Calculator;
use pwgen_lib::person::Person;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut john = Person::new("", "");
    john.first_name = "John".to_string();
    john.last_name = "Smith".to_string();
    john.introduce();

    let calculator = Calculator::new();
    let result = calculator.add(1, 2);
    info!("1 + 2 = {}", result);
    println!("{}", result);
}

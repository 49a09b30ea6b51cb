// Prints the lines each threshold lets through.
//
//     cargo run --example levels

use levelog::{Logger, Severity};

fn main() {
    for level in ["debug", "info", "WARN", "Error", "off", "not-a-level"] {
        let logger = Logger::new(format!("demo[{}]", level), level);
        println!("-- threshold {} --", logger.threshold());

        logger.error("disk almost full");
        logger.warn("retrying upstream request");
        logger.info("request served");
        logger.debug("cache hit for key 42");
    }

    let quiet = Logger::new("quiet", Severity::Off);
    quiet.error("never printed");
}

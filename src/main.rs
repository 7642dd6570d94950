use envreg::{cli, logging, Registry};
use log::info;

fn main() {
    logging::init();

    let mut registry = Registry::new();
    let bind_address = registry.string(
        "BIND_ADDRESS",
        true,
        "",
        "bind address for server, i.e. localhost",
    );
    let bind_port = registry.int("BIND_PORT", true, 0, "bind port for the server, i.e. 9090");

    // Exits on --help or invalid configuration
    cli::parse_or_exit(&mut registry);

    info!("Configuration loaded");
    println!("BIND_ADDRESS {}", bind_address);
    println!("BIND_PORT {}", bind_port);
}

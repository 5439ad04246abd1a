use colored::Colorize;

const COMMANDS: &[(&str, &str)] = &[
    ("generate controller <Name>", "Create <Name>Controller.java"),
    ("generate service <Name>", "Create the <Name>Service interface"),
    ("generate repository <Name>", "Create <Name>Repository.java"),
    ("generate entity <Name> [fields...]", "Create or update entity <Name>"),
    ("generate jwt", "Create an RSA key pair in jwt/"),
    ("--help", "Show detailed help"),
];

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!(
        "{} {}",
        "springcli".green().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("Scaffold controllers, services, repositories and JPA entities for Spring Boot projects.");
    println!();
    println!("{}", "Commands:".bold());
    for (command, description) in COMMANDS {
        println!("  {:<38} {}", command.cyan(), description.dimmed());
    }
    println!();
    println!("{}", "Examples:".bold());
    println!("  springcli generate entity User name:string age:int");
    println!("  springcli generate entity Post title:string author:ManyToOne:User");
    println!();
    Ok(())
}

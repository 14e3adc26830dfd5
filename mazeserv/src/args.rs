use clap::Parser;
#[derive(Parser)]
#[clap(version, about = "position relay server for maze clients")]
pub struct Args {
    #[clap(short, long, default_value_t = 4200, help = "port to listen on")]
    pub port: u16,
    #[clap(long, default_value = "127.0.0.1", help = "ip to listen on")]
    pub ip: String,
}

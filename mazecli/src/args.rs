use clap::Parser;
#[derive(Parser)]
#[clap(version, about = "headless maze client: streams chunks while walking")]
pub struct Args {
    #[clap(short, long, default_value_t = 4200, help = "relay port to connect to")]
    pub port: u16,
    #[clap(long, default_value = "127.0.0.1", help = "relay ip to connect to")]
    pub ip: String,
    #[clap(long, help = "skip the relay and run purely locally")]
    pub local_only: bool,
    #[clap(long, default_value_t = 42, help = "world seed")]
    pub seed: i32,
    #[clap(long, default_value_t = 3, help = "view distance in chunks")]
    pub view_distance: u32,
    #[clap(long, default_value_t = 200, help = "frames to simulate")]
    pub frames: u32,
    #[clap(long, default_value_t = 2.0, help = "world units walked per frame")]
    pub step: f64,
    #[clap(long, default_value_t = 50, help = "milliseconds per frame")]
    pub frame_ms: u64,
}

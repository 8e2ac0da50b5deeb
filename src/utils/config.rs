#![forbid(unsafe_code)]

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use log::{error, info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Deserialize;
use std::{env, fs, path::Path};
use structopt::StructOpt;
use toml;

// Greet utilities
use crate::utils::errors::Errors;
use crate::utils::greet_utils::get_absolute_path;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Directory and file locations. Unless otherwise noted, all files and
// directories are relative to the root directory.
const ENV_GREET_ROOT_DIR   : &str = "GREET_ROOT_DIR";
const DEFAULT_ROOT_DIR     : &str = "~/.greet";
const CONFIG_DIR           : &str = "/config";
const LOG4RS_CONFIG_FILE   : &str = "/log4rs.yml";   // relative to config dir
const GREET_CONFIG_FILE    : &str = "/greet.toml";   // relative to config dir

// Networking.
const DEFAULT_HTTP_ADDR    : &str = "http://localhost";
const DEFAULT_HTTP_PORT    : u16  = 8080;

// Console logging fallback.
const DEFAULT_LOG_PATTERN  : &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Assign the command line arguments BEFORE RUNTIME_CTX is initialized in main.
lazy_static! {
    pub static ref GREET_ARGS: GreetArgs = init_greet_args();
}

// Calculate the data directories BEFORE RUNTIME_CTX is initialized in main.
lazy_static! {
    pub static ref GREET_DIRS: GreetDirs = init_greet_dirs();
}

// ***************************************************************************
//                             Directory Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// GreetDirs:
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct GreetDirs {
    pub root_dir: String,
    pub config_dir: String,
}

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// CommandLineArgs:
// ---------------------------------------------------------------------------
#[derive(Debug, StructOpt)]
#[structopt(name = "greet_args", about = "Command line arguments for the greeting server.")]
pub struct GreetArgs {
    /// Specify the server's root data directory.
    ///
    /// This directory contains the optional configuration files the server
    /// reads at startup.  The root directory is calculated using the
    /// following priority order:
    ///
    ///   1. If set, the value of the GREET_ROOT_DIR environment variable,
    ///
    ///   2. Otherwise, if set, the value of the --root-dir command line argument,
    ///
    ///   3. Otherwise, ~/.greet
    ///
    #[structopt(short, long)]
    pub root_dir: Option<String>,
}

// ---------------------------------------------------------------------------
// Parms:
// ---------------------------------------------------------------------------
#[derive(Debug)]
#[allow(dead_code)]
pub struct Parms {
    pub config_file: String,
    pub config: Config,
}

// ---------------------------------------------------------------------------
// RuntimeCtx:
// ---------------------------------------------------------------------------
#[derive(Debug)]
#[allow(dead_code)]
pub struct RuntimeCtx {
    pub parms: Parms,
    pub greet_args: &'static GreetArgs,
    pub greet_dirs: &'static GreetDirs,
}

// ---------------------------------------------------------------------------
// Config:
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
pub struct Config {
    pub title: String,
    pub http_addr: String,
    pub http_port: u16,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Greet Server".to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

// ***************************************************************************
//                            Directory Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_greet_args:
// ---------------------------------------------------------------------------
/** Get the command line arguments. */
fn init_greet_args() -> GreetArgs {
    let args = GreetArgs::from_args();
    println!("{:?}", args);
    args
}

// ---------------------------------------------------------------------------
// init_greet_dirs:
// ---------------------------------------------------------------------------
/** Calculate the external data directories.  The directories are optional;
 * nothing is created and a missing directory simply means the defaults are
 * used downstream.
 */
fn init_greet_dirs() -> GreetDirs {
    let root_dir = get_root_dir();
    let config_dir = root_dir.clone() + CONFIG_DIR;
    GreetDirs { root_dir, config_dir }
}

// ---------------------------------------------------------------------------
// get_root_dir:
// ---------------------------------------------------------------------------
fn get_root_dir() -> String {
    // Order of precedence:
    //  1. Environment variable
    //  2. Command line --root-dir argument
    //  3. Default location
    //
    let root_dir = env::var(ENV_GREET_ROOT_DIR).unwrap_or_else(
        |_| {
            match GREET_ARGS.root_dir.clone() {
                Some(r) => r,
                None => DEFAULT_ROOT_DIR.to_string(),
            }
        });

    // Canonicalize the path.
    get_absolute_path(&root_dir)
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs from the configuration file if one exists, otherwise
 * fall back to a console appender so the server runs with zero on-disk
 * setup.
 */
pub fn init_log() {
    let logconfig = GREET_DIRS.config_dir.clone() + LOG4RS_CONFIG_FILE;
    if Path::new(&logconfig).is_file() {
        match log4rs::init_file(logconfig.clone(), Default::default()) {
            Ok(_) => (),
            Err(e) => {
                println!("{}", e);
                let s = format!("{}", Errors::Log4rsInitialization(logconfig));
                panic!("{}", s);
            },
        }
        info!("Log4rs initialized using: {}", logconfig);
    } else {
        match log4rs::init_config(default_log_config()) {
            Ok(_) => (),
            Err(e) => {
                println!("{}", e);
                let s = format!("{}", Errors::Log4rsInitialization(logconfig));
                panic!("{}", s);
            },
        }
        info!("Log4rs initialized with the default console appender.");
    }
}

// ---------------------------------------------------------------------------
// default_log_config:
// ---------------------------------------------------------------------------
/** Build the console-only logging configuration used when no log4rs.yml is
 * present.  A failure here aborts the application.
 */
fn default_log_config() -> log4rs::config::Config {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    match log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info)) {
            Ok(c) => c,
            Err(e) => {
                panic!("Default logging configuration error: {}", &e.to_string());
            }
        }
}

// ***************************************************************************
//                             Parms Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_parms:
// ---------------------------------------------------------------------------
/** Retrieve the application parameters from the configuration file in the
 * config data directory.  If the file doesn't exist, default values are
 * used.
 */
fn get_parms() -> Result<Parms> {
    // Get the config file path from its data directory.
    let config_file = GREET_DIRS.config_dir.clone() + GREET_CONFIG_FILE;

    // Read the configuration file.
    let config_file_abs = get_absolute_path(&config_file);
    info!("{}", Errors::ReadingConfigFile(config_file_abs.clone()));
    let contents = match fs::read_to_string(&config_file_abs) {
        Ok(c) => c,
        Err(_) => {
            println!("Unable to read configuration at {}. Using default values.", config_file);
            return Ok(Parms { config_file: Default::default(), config: Config::new() });
        }
    };

    // Parse the toml configuration.
    let config : Config = match toml::from_str(&contents) {
        Ok(c)  => c,
        Err(e) => {
            let msg = format!("{}\n   {}", Errors::TOMLParseError(config_file_abs), e);
            error!("{}", msg);
            return Result::Err(anyhow!(msg));
        }
    };

    Ok(Parms { config_file: config_file_abs, config })
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_runtime_context:
// ---------------------------------------------------------------------------
pub fn init_runtime_context() -> RuntimeCtx {
    // If this fails the application aborts.
    let parms = get_parms().expect("FAILED to read configuration file.");
    RuntimeCtx { parms, greet_args: &GREET_ARGS, greet_dirs: &GREET_DIRS }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use crate::utils::config::Config;

    #[test]
    fn default_config() {
        let config = Config::new();
        assert_eq!(config.title, "Greet Server");
        assert_eq!(config.http_addr, "http://localhost");
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn parse_toml_config() {
        let toml_text = r#"
            title = "Test Server"
            http_addr = "http://127.0.0.1"
            http_port = 9000
        "#;
        let config: Config = toml::from_str(toml_text).expect("toml parse failed");
        assert_eq!(config.title, "Test Server");
        assert_eq!(config.http_addr, "http://127.0.0.1");
        assert_eq!(config.http_port, 9000);
    }
}

//! SectorFS 交互式 shell
//!
//! 挂载介质目录、初始化虚拟文件系统，然后进入逐行读取命令的交互
//! 循环。介质目录可作为第一个命令行参数给出，默认为 `sdcard`。

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info};
use vfs::Vfs;

mod config;
mod repl;
mod store_impl;

use store_impl::FileStore;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_ROOT.to_string());

    let store = match FileStore::mount(root.as_str()) {
        Ok(store) => store,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let vfs = match Vfs::new(Arc::new(store)) {
        Ok(vfs) => vfs,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    info!("virtual filesystem initialized on {root}");

    match repl::run(&vfs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

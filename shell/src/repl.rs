//! 交互式命令循环
//!
//! 把一行输入拆为命令和参数，每个命令一对一映射到一个 VFS 操作，
//! 结果或错误格式化后打印。错误只终止当前命令，会话继续。

use std::io::{self, BufRead, Write};

use vfs::{Vfs, VfsError};

/// 运行命令循环，直到 `exit` 或输入耗尽
pub fn run(vfs: &Vfs) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !dispatch(vfs, line.trim()) {
            break;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

/// 处理一行输入；返回 `false` 表示结束会话
fn dispatch(vfs: &Vfs, line: &str) -> bool {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim_start()),
        None => (line, ""),
    };

    let result = match cmd {
        "" => Ok(()),
        "exit" => return false,
        "help" => {
            print_help();
            Ok(())
        }
        "index" => cmd_index(vfs),
        "sector" => cmd_sector(vfs, rest),
        "ls" => cmd_ls(vfs, rest),
        "exists" => cmd_exists(vfs, rest),
        "create" => cmd_create(vfs, rest),
        "delete" => vfs.delete(rest),
        "write" => cmd_write(vfs, rest),
        "read" => cmd_read(vfs, rest),
        _ => {
            println!("unknown command: {cmd} (try `help`)");
            Ok(())
        }
    };

    if let Err(err) = result {
        println!("{err}");
    }
    true
}

fn cmd_index(vfs: &Vfs) -> Result<(), VfsError> {
    for entry in vfs.entries()? {
        println!("{}", entry.format());
    }
    Ok(())
}

fn cmd_sector(vfs: &Vfs, path: &str) -> Result<(), VfsError> {
    match vfs.sector_of(path)? {
        Some(sector) => println!("{sector}"),
        None => println!("file {path} not found"),
    }
    Ok(())
}

fn cmd_ls(vfs: &Vfs, args: &str) -> Result<(), VfsError> {
    let mut recursive = false;
    let mut dir = "/";
    for arg in args.split_whitespace() {
        if arg == "-r" {
            recursive = true;
        } else {
            dir = arg;
        }
    }

    for name in vfs.list(dir, recursive)? {
        println!("{name}");
    }
    Ok(())
}

fn cmd_exists(vfs: &Vfs, path: &str) -> Result<(), VfsError> {
    println!("{}", if vfs.exists(path)? { "yes" } else { "no" });
    Ok(())
}

fn cmd_create(vfs: &Vfs, args: &str) -> Result<(), VfsError> {
    let mut overwrite = false;
    let mut path = "";
    for arg in args.split_whitespace() {
        if arg == "-f" {
            overwrite = true;
        } else {
            path = arg;
        }
    }

    let id = vfs.create(path, overwrite)?;
    println!("created in sector {id}");
    Ok(())
}

fn cmd_write(vfs: &Vfs, args: &str) -> Result<(), VfsError> {
    let (path, data) = match args.split_once(char::is_whitespace) {
        Some((path, data)) => (path, data),
        None => (args, ""),
    };

    let data = data.replace("\\n", "\n");
    let id = vfs.write(path, &data)?;
    println!("wrote sector {id}");
    Ok(())
}

fn cmd_read(vfs: &Vfs, path: &str) -> Result<(), VfsError> {
    print!("{}", vfs.read(path)?);
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  index                 print every index record");
    println!("  sector <path>         print the sector backing a file");
    println!("  ls <dir> [-r]         list a directory (-r: recursive)");
    println!("  exists <path>         check whether a file exists");
    println!("  create <path> [-f]    create a file (-f: overwrite)");
    println!("  write <path> <text>   write text (literal \\n becomes a line break)");
    println!("  read <path>           print a file's contents");
    println!("  delete <path>         delete a file");
    println!("  help                  this message");
    println!("  exit                  leave the shell");
}

#[cfg(test)]
mod tests {
    use store::RamStore;
    use vfs::Vfs;

    use super::*;

    fn ram_vfs() -> Vfs {
        Vfs::new(RamStore::new()).unwrap()
    }

    #[test]
    fn test_dispatch_exit_ends_session() {
        let vfs = ram_vfs();
        assert!(!dispatch(&vfs, "exit"));
    }

    #[test]
    fn test_dispatch_continues_on_error_and_unknown() {
        let vfs = ram_vfs();
        assert!(dispatch(&vfs, "read /missing"));
        assert!(dispatch(&vfs, "frobnicate"));
        assert!(dispatch(&vfs, ""));
    }

    #[test]
    fn test_dispatch_create_and_delete() {
        let vfs = ram_vfs();
        assert!(dispatch(&vfs, "create /f"));
        assert!(vfs.exists("/f").unwrap());
        assert!(dispatch(&vfs, "delete /f"));
        assert!(!vfs.exists("/f").unwrap());
    }

    #[test]
    fn test_dispatch_write_unescapes_line_breaks() {
        let vfs = ram_vfs();
        assert!(dispatch(&vfs, "write /f a\\nb"));
        assert_eq!(vfs.read("/f").unwrap(), "a\nb\n");
    }
}

mod app;
mod cli;
mod error;
mod event;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use storage::todos::TaskStore;

/// 启动 TUI 界面
fn run_tui() -> io::Result<()> {
    let store = match TaskStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open task storage: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let mut app = App::new(store);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 无子命令时进入 TUI
    match cli.command {
        None => run_tui()?,
        Some(Commands::Add { title }) => cli::tasks::execute_add(&title.join(" ")),
        Some(Commands::List) => cli::tasks::execute_list(),
        Some(Commands::Done { id }) => cli::tasks::execute_done(id),
        Some(Commands::Rm { id }) => cli::tasks::execute_rm(id),
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::home::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

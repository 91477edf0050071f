mod app;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod operations;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::{App, TaskView};
use cli::{Cli, Commands, Context};
use operations::tasks::TaskController;
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(ctx: Context) -> io::Result<()> {
    if let Err(e) = logging::init_file(&ctx.data_dir) {
        eprintln!("Warning: cannot open log file: {}", e);
    }

    let controller = TaskController::new(ctx.task_store(), TaskView::default(), ctx.sort_mode());
    let theme = Theme::from_name(&ctx.config.theme.name);
    let mut app = App::new(controller, theme).with_settings(ctx.data_dir, ctx.config);

    // 初始化终端
    let mut terminal = ratatui::init();

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

    // 无子命令时进入 TUI；TUI 的日志在确定数据目录后写入文件
    let command = cli.command.unwrap_or(Commands::Tui);
    if !matches!(command, Commands::Tui) {
        logging::init_stderr();
    }

    let ctx = match Context::resolve(cli.data_dir) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // 统一调度
    let result = match command {
        Commands::Tui => return run_tui(ctx),
        Commands::Add { text, due } => {
            cli::tasks::execute_add(&ctx, &text.join(" "), due.as_deref())
        }
        Commands::Remove { text } => cli::tasks::execute_remove(&ctx, &text.join(" ")),
        Commands::Toggle { text } => cli::tasks::execute_toggle(&ctx, &text.join(" ")),
        Commands::List { sort } => cli::tasks::execute_list(&ctx, sort.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::todo::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

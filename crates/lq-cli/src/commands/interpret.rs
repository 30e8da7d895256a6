use colored::Colorize;

use lq_interpret::{InterpretationService, Interpreter};

pub async fn run(id: u32, model: Option<String>) -> Result<(), String> {
    let slip = super::find_slip(id)?;
    let mut service = InterpretationService::new();
    if let Some(model) = model {
        service = service.with_model(model);
    }

    if !service.is_configured() {
        println!("  {}", "未配置生成后端，返回内置解签。".dimmed());
        println!();
    }

    let reading = service.interpret(slip).await;

    super::print_slip(slip);
    println!();
    super::print_reading(&reading);

    Ok(())
}

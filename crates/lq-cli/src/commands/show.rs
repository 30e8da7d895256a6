pub fn run(id: u32) -> Result<(), String> {
    let slip = super::find_slip(id)?;
    super::print_slip(slip);
    Ok(())
}

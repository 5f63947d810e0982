fn main() -> Result<(), fixdec::DecimalError> {
    println!("{}", fixdec_testing_consumer::sample_line()?);

    Ok(())
}

// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_money::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    decimal_money::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Decimal Money Example ===\n");

    // Every construction path yields the same value
    let price = Money::new("$32.35")?;
    let same = Money::new(Decimal::new(3235, 2))?;
    println!("{} == {}: {}", price, same, price == same);

    // Scalars scale money; money adds to money
    let line = price.checked_mul(3)?;
    let shipping = Money::new("7.50")?;
    let subtotal = line.checked_add(shipping)?;
    let tax = subtotal.percent("10")?;
    let total = subtotal.checked_add(tax)?;

    println!("\nLine:     {}", line);
    println!("Shipping: {}", shipping);
    println!("Tax:      {}", tax);
    println!("Total:    {}", total);
    println!("Cents:    {}", total.cents()?);
    println!(
        "Shipping is {}% of the subtotal",
        subtotal.proportion(&shipping)?.round_dp(2)
    );

    // Formatting options
    println!("\nPlain:         {}", total.to_s(&FormatOptions::plain()));
    println!(
        "Whole dollars: {}",
        Money::new("345.00")?.to_s(&FormatOptions::whole_dollars())
    );
    println!("Refund:        {}", -total);

    // Mixed-type operations are rejected
    println!("\nRejected operations:");
    if let Err(err) = total.checked_sub(15) {
        println!("  {}", err);
    }
    if let Err(err) = total.try_cmp("10") {
        println!("  {}", err);
    }
    if let Err(err) = Money::new(3.5f64) {
        println!("  {}", err);
    }

    Ok(())
}

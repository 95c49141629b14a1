use inform::estimators::active_information::ActiveInformation;
use inform::estimators::transfer_entropy::TransferEntropy;
use inform::estimators::{GlobalValue, LocalValues};
use ndarray::array;

fn main() -> inform::Result<()> {
    // Two realizations of a binary process, one per row
    let series = array![[0, 0, 1, 1, 1, 1, 0, 0, 0], [1, 0, 0, 1, 0, 0, 1, 0, 0]];

    // Active information with a history of two steps, measured in bits
    let ai = ActiveInformation::new_ensemble(&series, 2, 2)?;
    println!("Ensemble: {series:?}");
    println!("Active information: {}", ai.global_value());
    println!("Local active information: {:?}", ai.local_values());

    // A target that lags its source by one step
    let source = array![[1, 0, 0, 0, 0, 1, 1, 1, 1], [1, 1, 1, 1, 0, 0, 0, 1, 1]];
    let target = array![[0, 0, 1, 1, 1, 1, 0, 0, 0], [1, 0, 0, 0, 0, 1, 1, 1, 0]];

    let forward = TransferEntropy::new_ensemble(&source, &target, 2, 2)?;
    let backward = TransferEntropy::new_ensemble(&target, &source, 2, 2)?;
    println!("Transfer entropy source -> target: {}", forward.global_value());
    println!("Transfer entropy target -> source: {}", backward.global_value());

    // Series too short for the requested history
    let short = ActiveInformation::new(&array![0, 1], 2, 2)?;
    println!("Too short: {}", short.global_value());
    Ok(())
}

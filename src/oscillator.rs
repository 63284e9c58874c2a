use ndarray as nd;
use bspace::oscillator;

fn main() -> anyhow::Result<()> {
    let sols = oscillator::solve_harmonic_oscillator()?;

    println!("# n, E, E_exact");
    for (n, sol) in sols.iter().enumerate() {
        println!("# {:2}, {:.10}, {:.10}", n, sol.e, n as f64 + 0.5);
    }

    let x: nd::Array1<f64> = nd::Array1::linspace(-6.0, 6.0, 241);
    let wfs: Vec<nd::Array1<f64>>
        = sols.iter().map(|sol| sol.wf.eval_array(&x)).collect();
    let header: Vec<String>
        = (0..wfs.len()).map(|n| format!("psi{}", n)).collect();
    println!("x,{}", header.join(","));
    for (k, xk) in x.iter().enumerate() {
        let row: Vec<String>
            = wfs.iter().map(|wf| format!("{:.8e}", wf[k])).collect();
        println!("{:.4},{}", xk, row.join(","));
    }
    Ok(())
}

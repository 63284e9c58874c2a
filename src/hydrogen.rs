use anyhow::Context;
use ndarray as nd;
use bspace::hydrogen;

fn main() -> anyhow::Result<()> {
    let l: i32
        = match std::env::args().nth(1) {
            Some(arg) => arg.parse()
                .with_context(|| format!("invalid angular momentum {:?}", arg))?,
            None => 0,
        };
    let sols = hydrogen::solve_radial_hydrogen(l)?;

    println!("# l = {}", l);
    println!("# n, E, E_exact");
    for (k, sol) in sols.iter().enumerate() {
        let n = k + l as usize + 1;
        println!("# {:2}, {:.10}, {:.10}", n, sol.e, -0.5 / (n * n) as f64);
    }

    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 40.0, 401);
    let wfs: Vec<nd::Array1<f64>>
        = sols.iter().map(|sol| sol.wf.eval_array(&r)).collect();
    let header: Vec<String>
        = (0..wfs.len()).map(|k| format!("R{}", k + l as usize + 1)).collect();
    println!("r,{}", header.join(","));
    for (k, rk) in r.iter().enumerate() {
        let row: Vec<String>
            = wfs.iter().map(|wf| format!("{:.8e}", wf[k])).collect();
        println!("{:.4},{}", rk, row.join(","));
    }
    Ok(())
}

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use pack_order::app;
use pack_order::gateways::lambda::{ApiGatewayV2Request, ApiGatewayV2Response, LambdaProxy};
use pack_order::utils::{logger, validation::Validate};
use pack_order::LambdaConfig;
use tracing::Instrument;

async fn function_handler(
    proxy: &LambdaProxy,
    event: LambdaEvent<ApiGatewayV2Request>,
) -> Result<ApiGatewayV2Response, Error> {
    let (request, context) = event.into_parts();
    let span = tracing::info_span!("handler", request_id = %context.request_id);

    async move {
        tracing::debug!(
            method = %request.request_context.http.method,
            path = %request.raw_path,
            "forwarding event"
        );

        Ok::<_, Error>(proxy.forward(request).await?)
    }
    .instrument(span)
    .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env();
    config.validate()?;

    let router = app::build_router(&config.catalog_source())?;
    let proxy = LambdaProxy::start(router).await?;

    tracing::info!("Lambda proxy ready on {}", proxy.base_url());

    let proxy = &proxy;
    run(service_fn(move |event| async move {
        function_handler(proxy, event).await
    }))
    .await
}
